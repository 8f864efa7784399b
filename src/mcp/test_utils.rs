//! Test servers for tool tests: the real REST API on an ephemeral port,
//! and a stub API that records every request it receives.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, Uri},
};
use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde_json::Value;
use tokio::sync::Notify;

use super::client::ApiClient;
use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Start the real API over a fresh in-memory database.
pub(crate) async fn spawn_api() -> Arc<ApiClient> {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    let url = serve(routes::create_router(AppState::new(db))).await;
    Arc::new(ApiClient::new(Some(url)))
}

/// One request seen by a [`StubApi`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Recorded {
    pub method: Method,
    /// Path plus query string.
    pub uri: String,
    pub body: String,
}

struct StubState {
    routes: Vec<(Method, String, StatusCode, String)>,
    recorded: Mutex<Vec<Recorded>>,
}

/// Canned-response API. Unmatched requests get `404` with an empty body.
pub(crate) struct StubApi {
    state: Arc<StubState>,
    pub client: Arc<ApiClient>,
}

impl StubApi {
    /// Each route is (method, path without query, status, body).
    pub(crate) async fn spawn(routes: &[(Method, &str, StatusCode, &str)]) -> Self {
        let state = Arc::new(StubState {
            routes: routes
                .iter()
                .map(|(m, p, s, b)| (m.clone(), p.to_string(), *s, b.to_string()))
                .collect(),
            recorded: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));
        let url = serve(router).await;

        Self {
            state,
            client: Arc::new(ApiClient::new(Some(url))),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Recorded> {
        self.state.recorded.lock().unwrap().clone()
    }

    /// Requests other than GET.
    pub(crate) fn writes(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != Method::GET)
            .collect()
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    body: String,
) -> (StatusCode, String) {
    state.recorded.lock().unwrap().push(Recorded {
        method: method.clone(),
        uri: uri.to_string(),
        body,
    });

    state
        .routes
        .iter()
        .find(|(m, p, _, _)| *m == method && p == uri.path())
        .map(|(_, _, status, body)| (*status, body.clone()))
        .unwrap_or((StatusCode::NOT_FOUND, String::new()))
}

/// API that accepts every request and never answers. The returned
/// [`Notify`] fires once a request has arrived.
pub(crate) async fn spawn_unresponsive_api() -> (Arc<ApiClient>, Arc<Notify>) {
    let arrived = Arc::new(Notify::new());
    let signal = Arc::clone(&arrived);
    let router = Router::new().fallback(move || {
        let signal = Arc::clone(&signal);
        async move {
            signal.notify_one();
            std::future::pending::<StatusCode>().await
        }
    });
    let url = serve(router).await;
    (Arc::new(ApiClient::new(Some(url))), arrived)
}

/// Build an arguments object from a JSON literal.
pub(crate) fn args(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected a JSON object, got {}", other),
    }
}

/// Text of the single content block of a tool result.
pub(crate) fn text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

pub(crate) fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}
