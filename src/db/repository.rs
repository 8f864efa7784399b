//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the REST layer.
//! Every method returns a `Send` future so handlers generic over
//! [`Database`] can run on a multi-threaded runtime.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Id, Item, NewItem, TodoList},
};

/// Repository for TodoList operations.
pub trait TodoListRepository: Send + Sync {
    /// Create a new list and return it with its assigned id.
    fn create(&self, name: &str) -> impl Future<Output = DbResult<TodoList>> + Send;

    /// Get a list by id, including its items.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<TodoList>> + Send;

    /// Get all lists, optionally filtered by exact name, ordered by id.
    fn list(&self, name: Option<&str>) -> impl Future<Output = DbResult<Vec<TodoList>>> + Send;

    /// Persist a list's own fields. Items are not touched.
    fn update(&self, list: &TodoList) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a list and every item it owns.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<()>> + Send;

    /// Check whether a list exists.
    fn exists(&self, id: Id) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Repository for Item operations. Every call is scoped to the owning list.
pub trait ItemRepository: Send + Sync {
    /// Create an item in an existing list.
    fn create(&self, list_id: Id, item: &NewItem) -> impl Future<Output = DbResult<Item>> + Send;

    /// Get an item that belongs to the given list.
    fn get(&self, list_id: Id, item_id: Id) -> impl Future<Output = DbResult<Item>> + Send;

    /// Get a list's items, optionally filtered by exact name, ordered by id.
    fn list(
        &self,
        list_id: Id,
        name: Option<&str>,
    ) -> impl Future<Output = DbResult<Vec<Item>>> + Send;

    /// Persist an item's mutable fields.
    fn update(&self, item: &Item) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete an item that belongs to the given list.
    fn delete(&self, list_id: Id, item_id: Id) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type TodoLists: TodoListRepository;
    type Items: ItemRepository;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the todo list repository.
    fn todo_lists(&self) -> Self::TodoLists;

    /// Get the item repository.
    fn items(&self) -> Self::Items;
}
