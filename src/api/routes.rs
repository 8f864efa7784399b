//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, patch, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, HealthResponse};
use super::state::AppState;
use super::v1::{
    self, CreateItemRequest, CreateTodoListRequest, ErrorResponse, ItemResponse,
    TodoListResponse, UpdateItemRequest, UpdateTodoListRequest,
};
use crate::db::Database;

/// Build routes with generic database type.
///
/// Registers handlers that are generic over the Database trait, applying
/// the turbofish automatically. Repeated paths merge their method routers.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo Lists API",
        version = "0.1.0",
        description = "CRUD API for todo lists and their items",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        v1::list_todo_lists,
        v1::get_todo_list,
        v1::create_todo_list,
        v1::update_todo_list,
        v1::delete_todo_list,
        v1::list_items,
        v1::get_item,
        v1::create_item,
        v1::update_item,
        v1::complete_item,
        v1::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            TodoListResponse,
            CreateTodoListRequest,
            UpdateTodoListRequest,
            ItemResponse,
            CreateItemRequest,
            UpdateItemRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "todo-lists", description = "Todo list management endpoints"),
        (name = "items", description = "Item management endpoints, scoped to a list")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    let todo_list_routes = routes!(D => {
        get "/api/todoLists" => v1::list_todo_lists,
        post "/api/todoLists" => v1::create_todo_list,
        get "/api/todoLists/{id}" => v1::get_todo_list,
        put "/api/todoLists/{id}" => v1::update_todo_list,
        patch "/api/todoLists/{id}" => v1::update_todo_list,
        delete "/api/todoLists/{id}" => v1::delete_todo_list,
    });

    let item_routes = routes!(D => {
        get "/api/todoLists/{id}/items" => v1::list_items,
        post "/api/todoLists/{id}/items" => v1::create_item,
        get "/api/todoLists/{id}/items/{item_id}" => v1::get_item,
        put "/api/todoLists/{id}/items/{item_id}" => v1::update_item,
        patch "/api/todoLists/{id}/items/{item_id}" => v1::update_item,
        delete "/api/todoLists/{id}/items/{item_id}" => v1::delete_item,
        patch "/api/todoLists/{id}/items/{item_id}/complete" => v1::complete_item,
    });

    system_routes
        .merge(todo_list_routes)
        .merge(item_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
