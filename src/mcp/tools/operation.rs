//! Per-operation input extraction, name resolution and request shape.

use std::sync::Arc;

use reqwest::Method;
use rmcp::model::JsonObject;
use serde_json::{Value, json};

use crate::db::Id;
use crate::mcp::error::ToolResult;
use crate::mcp::inputs::{
    CreateItem, ItemIdentifier, ListName, NoInput, UpdateItem, UpdateToDoList, extract, input_schema,
};
use crate::mcp::lookup::TodoLookupService;

/// The REST operation a tool performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetLists,
    GetList,
    CreateList,
    UpdateList,
    DeleteList,
    CreateItem,
    UpdateItem,
    DeleteItem,
    CompleteItem,
}

/// One outbound HTTP call, fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: Method,
    pub path: String,
    pub query: Option<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiCall {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    fn query(mut self, key: &'static str, value: String) -> Self {
        self.query = Some((key, value));
        self
    }

    fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

const LISTS: &str = "/api/todoLists";

fn list_path(list_id: Id) -> String {
    format!("{}/{}", LISTS, list_id)
}

fn item_path(list_id: Id, item_id: Id) -> String {
    format!("{}/{}/items/{}", LISTS, list_id, item_id)
}

impl Operation {
    /// Input schema of the arguments this operation accepts.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        match self {
            Operation::GetLists => input_schema::<NoInput>(),
            Operation::GetList | Operation::CreateList | Operation::DeleteList => {
                input_schema::<ListName>()
            }
            Operation::UpdateList => input_schema::<UpdateToDoList>(),
            Operation::CreateItem => input_schema::<CreateItem>(),
            Operation::UpdateItem => input_schema::<UpdateItem>(),
            Operation::DeleteItem | Operation::CompleteItem => input_schema::<ItemIdentifier>(),
        }
    }

    /// Extract the input, resolve names to ids and describe the one HTTP
    /// call to make. Nothing is written before this returns.
    pub async fn plan(
        &self,
        arguments: &JsonObject,
        lookup: &TodoLookupService,
    ) -> ToolResult<ApiCall> {
        let call = match self {
            Operation::GetLists => {
                extract::<NoInput>(arguments)?;
                ApiCall::new(Method::GET, LISTS)
            }
            Operation::GetList => {
                let input: ListName = extract(arguments)?;
                ApiCall::new(Method::GET, LISTS).query("name", input.name)
            }
            Operation::CreateList => {
                let input: ListName = extract(arguments)?;
                ApiCall::new(Method::POST, LISTS).body(json!({ "name": input.name }))
            }
            Operation::UpdateList => {
                let input: UpdateToDoList = extract(arguments)?;
                let list_id = lookup.list_id_by_name(&input.name).await?;
                ApiCall::new(Method::PUT, list_path(list_id))
                    .body(json!({ "name": input.new_name }))
            }
            Operation::DeleteList => {
                let input: ListName = extract(arguments)?;
                let list_id = lookup.list_id_by_name(&input.name).await?;
                ApiCall::new(Method::DELETE, list_path(list_id))
            }
            Operation::CreateItem => {
                let input: CreateItem = extract(arguments)?;
                let list_id = lookup.list_id_by_name(&input.list_name).await?;
                ApiCall::new(Method::POST, format!("{}/items", list_path(list_id))).body(json!({
                    "name": input.name,
                    "description": input.description,
                }))
            }
            Operation::UpdateItem => {
                let input: UpdateItem = extract(arguments)?;
                let list_id = lookup.list_id_by_name(&input.list_name).await?;
                let item_id = lookup.item_id_by_name(list_id, &input.name).await?;
                ApiCall::new(Method::PATCH, item_path(list_id, item_id)).body(json!({
                    "name": input.new_name(),
                    "description": input.description(),
                }))
            }
            Operation::DeleteItem => {
                let input: ItemIdentifier = extract(arguments)?;
                let list_id = lookup.list_id_by_name(&input.list_name).await?;
                let item_id = lookup.item_id_by_name(list_id, &input.name).await?;
                ApiCall::new(Method::DELETE, item_path(list_id, item_id))
            }
            Operation::CompleteItem => {
                let input: ItemIdentifier = extract(arguments)?;
                let list_id = lookup.list_id_by_name(&input.list_name).await?;
                let item_id = lookup.item_id_by_name(list_id, &input.name).await?;
                ApiCall::new(
                    Method::PATCH,
                    format!("{}/complete", item_path(list_id, item_id)),
                )
            }
        };

        Ok(call)
    }
}
