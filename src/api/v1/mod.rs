//! V1 API handlers.

mod items;
mod todo_lists;

#[cfg(test)]
mod todo_lists_test;

pub use items::*;
pub use todo_lists::*;

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DbError;

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Entity not found: TodoList with id '1'")]
    pub error: String,
}

/// Handler result: a JSON error body paired with its status code on failure.
pub type HandlerResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map a storage error onto the REST status taxonomy.
pub(crate) fn map_db_error(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        DbError::NotFound { .. } => StatusCode::NOT_FOUND,
        DbError::Validation { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, e.to_string())
}

/// Malformed JSON bodies are reported as 400 regardless of the rejection kind.
pub(crate) fn bad_body(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

/// Treat an empty `?name=` the same as no filter.
pub(crate) fn name_filter(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|n| !n.is_empty())
}
