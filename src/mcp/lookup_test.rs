use axum::http::{Method, StatusCode};

use super::error::ToolError;
use super::lookup::TodoLookupService;
use super::test_utils::{StubApi, spawn_api};

#[tokio::test(flavor = "multi_thread")]
async fn resolves_list_and_item_against_real_api() {
    let client = spawn_api().await;
    let http = reqwest::Client::new();
    let base = client.base_url().to_string();

    let list: serde_json::Value = http
        .post(format!("{}/api/todoLists", base))
        .json(&serde_json::json!({"name": "Groceries"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let list_id = list["id"].as_i64().unwrap();
    let item: serde_json::Value = http
        .post(format!("{}/api/todoLists/{}/items", base, list_id))
        .json(&serde_json::json!({"name": "Yerba", "description": "1kg"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let lookup = TodoLookupService::new(client);

    assert_eq!(lookup.list_id_by_name("Groceries").await.unwrap(), list_id);
    assert_eq!(
        lookup.item_id_by_name(list_id, "Yerba").await.unwrap(),
        item["id"].as_i64().unwrap()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn first_match_wins() {
    let stub = StubApi::spawn(&[(
        Method::GET,
        "/api/todoLists",
        StatusCode::OK,
        r#"[{"id": 7, "name": "Dup"}, {"id": 3, "name": "Dup"}]"#,
    )])
    .await;

    let lookup = TodoLookupService::new(stub.client.clone());

    assert_eq!(lookup.list_id_by_name("Dup").await.unwrap(), 7);
    assert_eq!(stub.requests()[0].uri, "/api/todoLists?name=Dup");
}

#[tokio::test(flavor = "multi_thread")]
async fn names_are_query_encoded() {
    let stub = StubApi::spawn(&[(
        Method::GET,
        "/api/todoLists",
        StatusCode::OK,
        r#"[{"id": 1}]"#,
    )])
    .await;

    let lookup = TodoLookupService::new(stub.client.clone());
    lookup.list_id_by_name("Home & Garden").await.unwrap();

    assert_eq!(
        stub.requests()[0].uri,
        "/api/todoLists?name=Home+%26+Garden"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_list_result_is_not_found() {
    let stub = StubApi::spawn(&[(Method::GET, "/api/todoLists", StatusCode::OK, "[]")]).await;

    let err = TodoLookupService::new(stub.client.clone())
        .list_id_by_name("Nope")
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::NotFound { .. }));
    assert_eq!(err.to_string(), "No list was found with the name: Nope");
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_item_result_is_not_found() {
    let stub = StubApi::spawn(&[(
        Method::GET,
        "/api/todoLists/4/items",
        StatusCode::OK,
        "[]",
    )])
    .await;

    let err = TodoLookupService::new(stub.client.clone())
        .item_id_by_name(4, "Nope")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "No item was found with the name: Nope");
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_lookup_status_is_reported() {
    let stub = StubApi::spawn(&[(
        Method::GET,
        "/api/todoLists",
        StatusCode::INTERNAL_SERVER_ERROR,
        "boom",
    )])
    .await;
    let lookup = TodoLookupService::new(stub.client.clone());

    let list_err = lookup.list_id_by_name("Groceries").await.unwrap_err();
    // Unrouted path on the stub answers 404
    let item_err = lookup.item_id_by_name(1, "Yerba").await.unwrap_err();

    assert_eq!(list_err.to_string(), "Failed to retrieve list");
    assert_eq!(item_err.to_string(), "Failed to retrieve item");
    assert_eq!(list_err.category(), "Argument error");
}

#[tokio::test(flavor = "multi_thread")]
async fn undecodable_body_is_unexpected() {
    let stub = StubApi::spawn(&[(
        Method::GET,
        "/api/todoLists",
        StatusCode::OK,
        "not json",
    )])
    .await;

    let err = TodoLookupService::new(stub.client.clone())
        .list_id_by_name("Groceries")
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Unexpected { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_api_is_http_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = std::sync::Arc::new(super::ApiClient::new(Some(format!("http://{}", addr))));
    let err = TodoLookupService::new(client)
        .list_id_by_name("Groceries")
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Http { .. }));
    assert_eq!(err.category(), "HTTP error");
}
