//! Shared queries for SQLite repositories.

use sqlx::SqliteExecutor;

use crate::db::{DbError, DbResult, Id};

/// Whether a todo list with this id exists. Runs on a pool or inside a
/// transaction.
pub async fn list_exists<'e, E: SqliteExecutor<'e>>(executor: E, id: Id) -> DbResult<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM todo_list WHERE id = ?)")
        .bind(id)
        .fetch_one(executor)
        .await?;

    Ok(exists)
}

/// Fail with `NotFound` unless the todo list exists.
pub async fn require_list<'e, E: SqliteExecutor<'e>>(executor: E, id: Id) -> DbResult<()> {
    if list_exists(executor, id).await? {
        Ok(())
    } else {
        Err(DbError::not_found("TodoList", id))
    }
}
