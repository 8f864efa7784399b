//! Tests for SQLite database connection and migrations.

use crate::db::{Database, SqliteDatabase, TodoListRepository};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_all_tables() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // sqlite_sequence exists because of AUTOINCREMENT
    for table in ["_sqlx_migrations", "item", "todo_list"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory().await.unwrap();

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should be a no-op");
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
    db.migrate().await.unwrap();
    db.todo_lists().create("Groceries").await.unwrap();

    assert!(path.exists(), "database file should be created on open");
}

#[tokio::test(flavor = "multi_thread")]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    {
        let db = SqliteDatabase::open(&path).await.unwrap();
        db.migrate().await.unwrap();
        db.todo_lists().create("Chores").await.unwrap();
        db.pool().close().await;
    }

    let db = SqliteDatabase::open(&path).await.unwrap();
    db.migrate().await.unwrap();
    let lists = db.todo_lists().list(None).await.unwrap();

    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "Chores");
}
