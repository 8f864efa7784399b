//! Integration tests for TodoList API endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

async fn test_app() -> axum::Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    let state = AppState::new(db);
    routes::create_router(state)
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create_list(app: &axum::Router, name: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/todoLists", json!({"name": name})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

// =============================================================================
// GET /api/todoLists
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn list_todo_lists_initially_empty() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/todoLists")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_todo_lists_filters_by_exact_name() {
    let app = test_app().await;
    create_list(&app, "Groceries").await;
    create_list(&app, "Chores").await;

    let response = app
        .clone()
        .oneshot(get("/api/todoLists?name=Groceries"))
        .await
        .unwrap();

    let body = json_body(response).await;
    let lists = body.as_array().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["name"], "Groceries");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_todo_lists_with_empty_name_returns_all() {
    let app = test_app().await;
    create_list(&app, "Groceries").await;
    create_list(&app, "Chores").await;

    let response = app.clone().oneshot(get("/api/todoLists?name=")).await.unwrap();

    assert_eq!(json_body(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_names_are_allowed_and_ordered_by_id() {
    let app = test_app().await;
    let first = create_list(&app, "Groceries").await;
    let second = create_list(&app, "Groceries").await;

    assert_ne!(first["id"], second["id"]);

    let response = app
        .clone()
        .oneshot(get("/api/todoLists?name=Groceries"))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body[0]["id"], first["id"]);
    assert_eq!(body[1]["id"], second["id"]);
}

// =============================================================================
// POST /api/todoLists
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn create_todo_list_returns_201_with_location() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/todoLists", json!({"name": "Groceries"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();

    let body = json_body(response).await;
    assert_eq!(body["name"], "Groceries");
    assert_eq!(body["items"], json!([]));
    assert_eq!(location, format!("/api/todoLists/{}", body["id"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_todo_list_with_empty_name_is_bad_request() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/todoLists", json!({"name": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_todo_list_with_whitespace_name_maps_store_validation() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/todoLists", json!({"name": "  \t "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Validation error: List name cannot be empty"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn create_todo_list_with_malformed_body_is_bad_request() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/todoLists", json!({"title": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// GET /api/todoLists/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn get_todo_list_includes_items() {
    let app = test_app().await;
    let list = create_list(&app, "Groceries").await;
    let id = list["id"].as_i64().unwrap();

    app.clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/todoLists/{}/items", id),
            json!({"name": "Yerba", "description": "1kg"}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get(&format!("/api/todoLists/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["items"][0]["name"], "Yerba");
    assert_eq!(body["items"][0]["isComplete"], false);
    let mut item_keys: Vec<&str> = body["items"][0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    item_keys.sort_unstable();
    assert_eq!(item_keys, vec!["description", "id", "isComplete", "name"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_todo_list_is_not_found() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/todoLists/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// PUT/PATCH /api/todoLists/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn put_renames_todo_list() {
    let app = test_app().await;
    let list = create_list(&app, "Groceries").await;
    let uri = format!("/api/todoLists/{}", list["id"]);

    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({"name": "Shopping"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["name"], "Shopping");
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_with_empty_name_keeps_existing_name() {
    let app = test_app().await;
    let list = create_list(&app, "Groceries").await;
    let uri = format!("/api/todoLists/{}", list["id"]);

    let response = app
        .clone()
        .oneshot(json_request("PATCH", &uri, json!({"name": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["name"], "Groceries");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_todo_list_is_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("PUT", "/api/todoLists/77", json!({"name": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// DELETE /api/todoLists/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn delete_todo_list_returns_no_content_and_removes_items() {
    let app = test_app().await;
    let list = create_list(&app, "Groceries").await;
    let id = list["id"].as_i64().unwrap();
    app.clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/todoLists/{}/items", id),
            json!({"name": "Yerba", "description": "1kg"}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/todoLists/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/todoLists/{}/items", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_todo_list_is_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/todoLists/5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
