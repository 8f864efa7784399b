//! SQLite implementation of the database traits.
//!
//! This module provides a sqlx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod helpers;
mod item;
mod todo_list;

#[cfg(test)]
mod connection_test;

pub use connection::SqliteDatabase;
pub use item::SqliteItemRepository;
pub use todo_list::SqliteTodoListRepository;
