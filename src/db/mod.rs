//! Database abstraction layer.
//!
//! Trait-based data access for todo lists and their items, so the REST
//! layer never touches a concrete storage backend.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (TodoList, Item)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: sqlx-backed implementation

mod error;
mod models;
mod repository;
pub mod sqlite;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
