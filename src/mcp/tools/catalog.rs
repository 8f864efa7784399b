//! The nine todo tools. Names are matched case-sensitively.

use super::{Operation, ToolSpec};

pub static TOOLS: [ToolSpec; 9] = [
    ToolSpec {
        name: "GetToDoLists",
        description: "Retrieve all ToDo lists. Only used when no specific list is specified.",
        operation: Operation::GetLists,
        success_message: "All lists were retrieved successfully.",
        failure_prefix: "There was an error retrieving the lists.",
        empty_result_error: None,
    },
    ToolSpec {
        name: "GetToDoList",
        description: "Retrieve one list by its name when a specific list is named.",
        operation: Operation::GetList,
        success_message: "The list was retrieved successfully.",
        failure_prefix: "There was an error retrieving the list.",
        empty_result_error: Some("There are no lists with the specified name."),
    },
    ToolSpec {
        name: "CreateToDoList",
        description: "Creates a new ToDo list. Use this only when the list does not already exist.",
        operation: Operation::CreateList,
        success_message: "Creation of ToDo list was successful",
        failure_prefix: "Creation of ToDo list failed",
        empty_result_error: None,
    },
    ToolSpec {
        name: "UpdateToDoList",
        description: "Renames an existing ToDo list.",
        operation: Operation::UpdateList,
        success_message: "Update of ToDo list was successful",
        failure_prefix: "Update of ToDo list failed",
        empty_result_error: None,
    },
    ToolSpec {
        name: "DeleteToDoList",
        description: "Deletes an existing ToDo list, and all of its items, by name.",
        operation: Operation::DeleteList,
        success_message: "Deletion of ToDo list was successful",
        failure_prefix: "Deletion of ToDo list failed",
        empty_result_error: None,
    },
    ToolSpec {
        name: "CreateItem",
        description: "Creates a new item that belongs to a list. Use this only when the item does not already exist.",
        operation: Operation::CreateItem,
        success_message: "The item was created successfully.",
        failure_prefix: "There was an error creating the item.",
        empty_result_error: None,
    },
    ToolSpec {
        name: "UpdateItem",
        description: "Updates an already existing item.",
        operation: Operation::UpdateItem,
        success_message: "Update of item was successful",
        failure_prefix: "Update of item failed",
        empty_result_error: None,
    },
    ToolSpec {
        name: "DeleteItem",
        description: "Deletes an already existing item.",
        operation: Operation::DeleteItem,
        success_message: "Deletion of item was successful",
        failure_prefix: "Deletion of item failed",
        empty_result_error: None,
    },
    ToolSpec {
        name: "CompleteItem",
        description: "Marks an item as complete.",
        operation: Operation::CompleteItem,
        success_message: "Item has been marked as complete.",
        failure_prefix: "Failed to mark an item as complete.",
        empty_result_error: None,
    },
];
