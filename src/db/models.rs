//! Domain models for the todo database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

/// Numeric identifier assigned by the store on creation.
pub type Id = i64;

/// A named collection of items. Owns its items: deleting a list deletes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub id: Id,
    pub name: String,
    /// Items owned by this list, ordered by id.
    pub items: Vec<Item>,
}

/// A single entry in a todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub is_complete: bool,
    /// Owning list. Must reference an existing `TodoList`.
    pub todo_list_id: Id,
}

/// Fields required to create an item; the store assigns the id and the
/// completion flag starts out false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}
