//! SQLite TodoListRepository implementation.

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};

use super::helpers::{list_exists, require_list};
use super::item::item_from_row;
use crate::db::{DbError, DbResult, Id, Item, TodoList, TodoListRepository};

/// SQLx-backed todo list repository.
pub struct SqliteTodoListRepository {
    pub(crate) pool: SqlitePool,
}

impl SqliteTodoListRepository {
    async fn items_for(&self, list_id: Id) -> DbResult<Vec<Item>> {
        let rows = sqlx::query(
            "SELECT id, name, description, is_complete, todo_list_id
             FROM item WHERE todo_list_id = ? ORDER BY id",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(item_from_row).collect())
    }
}

impl TodoListRepository for SqliteTodoListRepository {
    async fn create(&self, name: &str) -> DbResult<TodoList> {
        if name.trim().is_empty() {
            return Err(DbError::Validation {
                message: "List name cannot be empty".to_string(),
            });
        }

        let result = sqlx::query("INSERT INTO todo_list (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(TodoList {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            items: vec![],
        })
    }

    async fn get(&self, id: Id) -> DbResult<TodoList> {
        let row = sqlx::query("SELECT id, name FROM todo_list WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("TodoList", id))?;

        Ok(TodoList {
            id: row.get("id"),
            name: row.get("name"),
            items: self.items_for(id).await?,
        })
    }

    async fn list(&self, name: Option<&str>) -> DbResult<Vec<TodoList>> {
        let rows = sqlx::query(
            "SELECT id, name FROM todo_list
             WHERE (?1 IS NULL OR name = ?1)
             ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        // Load all owned items in one pass, then group them per list
        let item_rows = sqlx::query(
            "SELECT i.id, i.name, i.description, i.is_complete, i.todo_list_id
             FROM item i JOIN todo_list l ON l.id = i.todo_list_id
             WHERE (?1 IS NULL OR l.name = ?1)
             ORDER BY i.id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_list: HashMap<Id, Vec<Item>> = HashMap::new();
        for item in item_rows.iter().map(item_from_row) {
            items_by_list.entry(item.todo_list_id).or_default().push(item);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let id: Id = row.get("id");
                TodoList {
                    id,
                    name: row.get("name"),
                    items: items_by_list.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }

    async fn update(&self, list: &TodoList) -> DbResult<()> {
        let result = sqlx::query("UPDATE todo_list SET name = ? WHERE id = ?")
            .bind(&list.name)
            .bind(list.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("TodoList", list.id));
        }

        Ok(())
    }

    async fn delete(&self, id: Id) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        require_list(&mut *tx, id).await?;

        // Owned items go first so the cascade does not depend on the
        // foreign_keys pragma being enabled
        sqlx::query("DELETE FROM item WHERE todo_list_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM todo_list WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn exists(&self, id: Id) -> DbResult<bool> {
        list_exists(&self.pool, id).await
    }
}
