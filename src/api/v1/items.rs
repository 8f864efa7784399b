//! Item management handlers. Every route is scoped to the owning list.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::db::{Database, Id, Item, ItemRepository, NewItem};

use super::{ErrorResponse, HandlerResult, bad_body, map_db_error, name_filter};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    #[schema(example = 42)]
    pub id: Id,
    #[schema(example = "Yerba")]
    pub name: String,
    #[schema(example = "1kg pack")]
    pub description: String,
    pub is_complete: bool,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            is_complete: item.is_complete,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(example = "Yerba")]
    pub name: String,
    #[schema(example = "1kg pack")]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_complete: Option<bool>,
}

impl UpdateItemRequest {
    fn merge_into(self, target: &mut Item) {
        if let Some(name) = self.name
            && !name.is_empty()
        {
            target.name = name;
        }
        if let Some(description) = self.description
            && !description.is_empty()
        {
            target.description = description;
        }
        if let Some(is_complete) = self.is_complete {
            target.is_complete = is_complete;
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListItemsQuery {
    /// Exact item name to filter by
    #[param(example = "Yerba")]
    pub name: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/todoLists/{id}/items",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Owning TodoList ID"),
        ListItemsQuery
    ),
    responses(
        (status = 200, description = "Items ordered by id", body = Vec<ItemResponse>),
        (status = 404, description = "TodoList not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_items<D: Database>(
    State(state): State<AppState<D>>,
    Path(list_id): Path<Id>,
    Query(query): Query<ListItemsQuery>,
) -> HandlerResult<Json<Vec<ItemResponse>>> {
    let items = state
        .db()
        .items()
        .list(list_id, name_filter(&query.name))
        .await
        .map_err(map_db_error)?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/todoLists/{id}/items/{item_id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Owning TodoList ID"),
        ("item_id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found in this list", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_item<D: Database>(
    State(state): State<AppState<D>>,
    Path((list_id, item_id)): Path<(Id, Id)>,
) -> HandlerResult<Json<ItemResponse>> {
    let item = state
        .db()
        .items()
        .get(list_id, item_id)
        .await
        .map_err(map_db_error)?;

    Ok(Json(ItemResponse::from(item)))
}

#[utoipa::path(
    post,
    path = "/api/todoLists/{id}/items",
    tag = "items",
    params(("id" = i64, Path, description = "Owning TodoList ID")),
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "TodoList not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_item<D: Database>(
    State(state): State<AppState<D>>,
    Path(list_id): Path<Id>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> HandlerResult<(StatusCode, [(header::HeaderName, String); 1], Json<ItemResponse>)> {
    let Json(req) = payload.map_err(bad_body)?;

    let created = state
        .db()
        .items()
        .create(
            list_id,
            &NewItem {
                name: req.name,
                description: req.description,
            },
        )
        .await
        .map_err(map_db_error)?;

    info!(list_id, id = created.id, "Created item");

    let location = format!("/api/todoLists/{}/items/{}", list_id, created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ItemResponse::from(created)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/todoLists/{id}/items/{item_id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Owning TodoList ID"),
        ("item_id" = i64, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Item not found in this list", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_item<D: Database>(
    State(state): State<AppState<D>>,
    Path((list_id, item_id)): Path<(Id, Id)>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> HandlerResult<Json<ItemResponse>> {
    let Json(req) = payload.map_err(bad_body)?;

    let repo = state.db().items();
    let mut item = repo.get(list_id, item_id).await.map_err(map_db_error)?;

    req.merge_into(&mut item);
    repo.update(&item).await.map_err(map_db_error)?;

    Ok(Json(ItemResponse::from(item)))
}

#[utoipa::path(
    patch,
    path = "/api/todoLists/{id}/items/{item_id}/complete",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Owning TodoList ID"),
        ("item_id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item marked as complete"),
        (status = 404, description = "Item not found in this list", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn complete_item<D: Database>(
    State(state): State<AppState<D>>,
    Path((list_id, item_id)): Path<(Id, Id)>,
) -> HandlerResult<StatusCode> {
    let repo = state.db().items();
    let mut item = repo.get(list_id, item_id).await.map_err(map_db_error)?;

    item.is_complete = true;
    repo.update(&item).await.map_err(map_db_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/todoLists/{id}/items/{item_id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Owning TodoList ID"),
        ("item_id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found in this list", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_item<D: Database>(
    State(state): State<AppState<D>>,
    Path((list_id, item_id)): Path<(Id, Id)>,
) -> HandlerResult<StatusCode> {
    state
        .db()
        .items()
        .delete(list_id, item_id)
        .await
        .map_err(map_db_error)?;

    info!(list_id, item_id, "Deleted item");

    Ok(StatusCode::NO_CONTENT)
}
