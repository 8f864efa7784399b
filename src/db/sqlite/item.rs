//! SQLite ItemRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::require_list;
use crate::db::{DbError, DbResult, Id, Item, ItemRepository, NewItem};

/// SQLx-backed item repository.
pub struct SqliteItemRepository {
    pub(crate) pool: SqlitePool,
}

pub(super) fn item_from_row(row: &SqliteRow) -> Item {
    Item {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        is_complete: row.get("is_complete"),
        todo_list_id: row.get("todo_list_id"),
    }
}

impl ItemRepository for SqliteItemRepository {
    async fn create(&self, list_id: Id, item: &NewItem) -> DbResult<Item> {
        if item.name.trim().is_empty() || item.description.trim().is_empty() {
            return Err(DbError::Validation {
                message: "Item name and description are required".to_string(),
            });
        }

        require_list(&self.pool, list_id).await?;

        let result = sqlx::query(
            "INSERT INTO item (name, description, is_complete, todo_list_id) VALUES (?, ?, 0, ?)",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(list_id)
        .execute(&self.pool)
        .await?;

        Ok(Item {
            id: result.last_insert_rowid(),
            name: item.name.clone(),
            description: item.description.clone(),
            is_complete: false,
            todo_list_id: list_id,
        })
    }

    async fn get(&self, list_id: Id, item_id: Id) -> DbResult<Item> {
        let row = sqlx::query(
            "SELECT id, name, description, is_complete, todo_list_id
             FROM item WHERE id = ? AND todo_list_id = ?",
        )
        .bind(item_id)
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Item", item_id))?;

        Ok(item_from_row(&row))
    }

    async fn list(&self, list_id: Id, name: Option<&str>) -> DbResult<Vec<Item>> {
        require_list(&self.pool, list_id).await?;

        let rows = sqlx::query(
            "SELECT id, name, description, is_complete, todo_list_id
             FROM item
             WHERE todo_list_id = ?1 AND (?2 IS NULL OR name = ?2)
             ORDER BY id",
        )
        .bind(list_id)
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(item_from_row).collect())
    }

    async fn update(&self, item: &Item) -> DbResult<()> {
        let result = sqlx::query(
            "UPDATE item SET name = ?, description = ?, is_complete = ?
             WHERE id = ? AND todo_list_id = ?",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.is_complete)
        .bind(item.id)
        .bind(item.todo_list_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", item.id));
        }

        Ok(())
    }

    async fn delete(&self, list_id: Id, item_id: Id) -> DbResult<()> {
        // Lookup-then-remove: a missing or foreign item is a NotFound, never a silent no-op
        let item = self.get(list_id, item_id).await?;

        sqlx::query("DELETE FROM item WHERE id = ?")
            .bind(item.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
