//! Name to id resolution against the REST API.
//!
//! Every call is a fresh round trip; nothing is cached. When several
//! entities share a name the first one returned (lowest id) wins.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::client::ApiClient;
use super::error::{ToolError, ToolResult};
use crate::db::Id;

#[derive(Deserialize)]
struct EntityId {
    id: Id,
}

/// Resolves human-readable list and item names to numeric ids.
#[derive(Clone)]
pub struct TodoLookupService {
    client: Arc<ApiClient>,
}

impl TodoLookupService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Id of the first list whose name matches exactly.
    #[instrument(skip(self))]
    pub async fn list_id_by_name(&self, name: &str) -> ToolResult<Id> {
        let response = self
            .client
            .get("/api/todoLists")
            .query(&[("name", name)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "List lookup failed");
            return Err(ToolError::NotFound {
                message: "Failed to retrieve list".to_string(),
            });
        }

        let lists: Vec<EntityId> = response.json().await?;
        let id = first_id(lists).ok_or_else(|| ToolError::NotFound {
            message: format!("No list was found with the name: {}", name),
        })?;

        debug!(id, "Resolved list");
        Ok(id)
    }

    /// Id of the first item in `list_id` whose name matches exactly.
    #[instrument(skip(self))]
    pub async fn item_id_by_name(&self, list_id: Id, name: &str) -> ToolResult<Id> {
        let response = self
            .client
            .get(&format!("/api/todoLists/{}/items", list_id))
            .query(&[("name", name)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Item lookup failed");
            return Err(ToolError::NotFound {
                message: "Failed to retrieve item".to_string(),
            });
        }

        let items: Vec<EntityId> = response.json().await?;
        let id = first_id(items).ok_or_else(|| ToolError::NotFound {
            message: format!("No item was found with the name: {}", name),
        })?;

        debug!(id, "Resolved item");
        Ok(id)
    }
}

fn first_id(entities: Vec<EntityId>) -> Option<Id> {
    entities.into_iter().next().map(|e| e.id)
}
