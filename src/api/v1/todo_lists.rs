//! TodoList management handlers.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::db::{Database, Id, TodoList, TodoListRepository};

use super::{ErrorResponse, HandlerResult, ItemResponse, bad_body, map_db_error, name_filter};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoListResponse {
    #[schema(example = 1)]
    pub id: Id,
    #[schema(example = "Groceries")]
    pub name: String,
    pub items: Vec<ItemResponse>,
}

impl From<TodoList> for TodoListResponse {
    fn from(list: TodoList) -> Self {
        Self {
            id: list.id,
            name: list.name,
            items: list.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoListRequest {
    #[schema(example = "Groceries")]
    pub name: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTodoListRequest {
    #[schema(example = "Shopping")]
    pub name: Option<String>,
}

impl UpdateTodoListRequest {
    fn merge_into(self, target: &mut TodoList) {
        if let Some(name) = self.name
            && !name.is_empty()
        {
            target.name = name;
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTodoListsQuery {
    /// Exact list name to filter by
    #[param(example = "Groceries")]
    pub name: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/todoLists",
    tag = "todo-lists",
    params(ListTodoListsQuery),
    responses(
        (status = 200, description = "Lists ordered by id", body = Vec<TodoListResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_todo_lists<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListTodoListsQuery>,
) -> HandlerResult<Json<Vec<TodoListResponse>>> {
    let lists = state
        .db()
        .todo_lists()
        .list(name_filter(&query.name))
        .await
        .map_err(map_db_error)?;

    Ok(Json(lists.into_iter().map(TodoListResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/todoLists/{id}",
    tag = "todo-lists",
    params(("id" = i64, Path, description = "TodoList ID")),
    responses(
        (status = 200, description = "TodoList found", body = TodoListResponse),
        (status = 404, description = "TodoList not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_todo_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> HandlerResult<Json<TodoListResponse>> {
    let list = state
        .db()
        .todo_lists()
        .get(id)
        .await
        .map_err(map_db_error)?;

    Ok(Json(TodoListResponse::from(list)))
}

#[utoipa::path(
    post,
    path = "/api/todoLists",
    tag = "todo-lists",
    request_body = CreateTodoListRequest,
    responses(
        (status = 201, description = "TodoList created", body = TodoListResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_todo_list<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateTodoListRequest>, JsonRejection>,
) -> HandlerResult<(StatusCode, [(header::HeaderName, String); 1], Json<TodoListResponse>)> {
    let Json(req) = payload.map_err(bad_body)?;

    let created = state
        .db()
        .todo_lists()
        .create(&req.name)
        .await
        .map_err(map_db_error)?;

    info!(id = created.id, name = %created.name, "Created todo list");

    let location = format!("/api/todoLists/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoListResponse::from(created)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/todoLists/{id}",
    tag = "todo-lists",
    params(("id" = i64, Path, description = "TodoList ID")),
    request_body = UpdateTodoListRequest,
    responses(
        (status = 200, description = "TodoList updated", body = TodoListResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "TodoList not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_todo_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
    payload: Result<Json<UpdateTodoListRequest>, JsonRejection>,
) -> HandlerResult<Json<TodoListResponse>> {
    let Json(req) = payload.map_err(bad_body)?;

    let repo = state.db().todo_lists();
    let mut list = repo.get(id).await.map_err(map_db_error)?;

    req.merge_into(&mut list);
    repo.update(&list).await.map_err(map_db_error)?;

    Ok(Json(TodoListResponse::from(list)))
}

#[utoipa::path(
    delete,
    path = "/api/todoLists/{id}",
    tag = "todo-lists",
    params(("id" = i64, Path, description = "TodoList ID")),
    responses(
        (status = 204, description = "TodoList and its items deleted"),
        (status = 404, description = "TodoList not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_todo_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> HandlerResult<StatusCode> {
    state
        .db()
        .todo_lists()
        .delete(id)
        .await
        .map_err(map_db_error)?;

    info!(id, "Deleted todo list");

    Ok(StatusCode::NO_CONTENT)
}
