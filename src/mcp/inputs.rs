//! Typed tool inputs built from raw call arguments.
//!
//! Each input struct is the single source of its tool's argument schema:
//! property names, descriptions and required keys all come from the derived
//! [`JsonSchema`], and the same schema drives argument checking.

use std::sync::Arc;

use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::JsonObject;
use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ToolError, ToolResult};
use super::validation::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, Violations, is_blank, require_arguments};

/// A tool input: a deserializable argument struct with field rules.
pub trait ToolInput: DeserializeOwned + JsonSchema + 'static {
    fn validate(&self) -> ToolResult<()>;
}

/// JSON input schema advertised for `T`.
pub fn input_schema<T: ToolInput>() -> Arc<JsonObject> {
    schema_for_type::<T>().into()
}

/// Keys listed under `required` in a schema, in declaration order.
pub fn required_keys(schema: &JsonObject) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn property_keys(schema: &JsonObject) -> Vec<&str> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|properties| properties.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

/// Validate raw arguments, build the typed input and validate it, failing
/// fast on the first stage that fails.
pub fn extract<T: ToolInput>(arguments: &JsonObject) -> ToolResult<T> {
    let schema = input_schema::<T>();
    require_arguments(arguments, &required_keys(&schema))?;

    let known = string_arguments(arguments, &property_keys(&schema))?;
    let input: T = serde_json::from_value(Value::Object(known)).map_err(|e| {
        ToolError::Argument {
            message: e.to_string(),
        }
    })?;

    input.validate()?;
    Ok(input)
}

/// Declared properties only, as strings. Null reads as empty; any other
/// non-string value is an argument error. Undeclared keys are ignored.
fn string_arguments(arguments: &JsonObject, keys: &[&str]) -> ToolResult<JsonObject> {
    let mut known = JsonObject::new();
    for key in keys {
        let value = match arguments.get(*key) {
            None => continue,
            Some(Value::Null) => Value::String(String::new()),
            Some(value @ Value::String(_)) => value.clone(),
            Some(other) => {
                return Err(ToolError::Argument {
                    message: format!("Field '{}' must be a string. Got: {}", key, other),
                });
            }
        };
        known.insert(key.to_string(), value);
    }
    Ok(known)
}

/// Tools that take no arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct NoInput {}

impl ToolInput for NoInput {
    fn validate(&self) -> ToolResult<()> {
        Ok(())
    }
}

/// A list addressed by its name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ListName {
    #[schemars(description = "The name of the ToDo list")]
    pub name: String,
}

impl ToolInput for ListName {
    fn validate(&self) -> ToolResult<()> {
        Violations::new().name(&self.name).finish()
    }
}

/// Rename of a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateToDoList {
    #[schemars(description = "The current name of the ToDo list")]
    pub name: String,
    #[schemars(description = "New name for the ToDo list")]
    pub new_name: String,
}

impl ToolInput for UpdateToDoList {
    fn validate(&self) -> ToolResult<()> {
        Violations::new()
            .name(&self.name)
            .name(&self.new_name)
            .check(self.new_name != self.name, "Name cannot be the same.")
            .finish()
    }
}

/// A new item and the list it goes into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[schemars(description = "The name of the item")]
    pub name: String,
    #[schemars(description = "The description of the item")]
    pub description: String,
    #[schemars(description = "The name of the list the item belongs to")]
    pub list_name: String,
}

impl ToolInput for CreateItem {
    fn validate(&self) -> ToolResult<()> {
        Violations::new()
            .name(&self.name)
            .description(&self.description)
            .check(
                !is_blank(&self.list_name),
                "The name of the list where the item belongs is needed.",
            )
            .finish()
    }
}

/// Partial update of an item. Absent or empty fields leave the stored value
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[schemars(description = "The name of the item to update")]
    pub name: String,
    #[schemars(description = "The name of the list that owns the item")]
    pub list_name: String,
    #[schemars(
        description = "New name for the item. Empty if the user doesn't specify a new name."
    )]
    pub new_name: Option<String>,
    #[schemars(
        description = "New description for the item. Empty if the user doesn't specify a new description."
    )]
    pub description: Option<String>,
}

impl UpdateItem {
    pub fn new_name(&self) -> &str {
        self.new_name.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl ToolInput for UpdateItem {
    fn validate(&self) -> ToolResult<()> {
        Violations::new()
            .name(&self.name)
            .check(
                !is_blank(&self.list_name),
                "The name of the list where the item belongs is needed.",
            )
            .check(
                !is_blank(self.new_name()) || !is_blank(self.description()),
                "At least one of 'newName' or 'description' must be provided.",
            )
            .max_len(self.new_name(), MAX_NAME_LEN, "Name cannot exceed 100 characters.")
            .max_len(
                self.description(),
                MAX_DESCRIPTION_LEN,
                "Description cannot exceed 250 characters.",
            )
            .finish()
    }
}

/// An existing item addressed by its name and its list's name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemIdentifier {
    #[schemars(description = "The name of the item")]
    pub name: String,
    #[schemars(description = "The name of the list that owns the item")]
    pub list_name: String,
}

impl ToolInput for ItemIdentifier {
    fn validate(&self) -> ToolResult<()> {
        Violations::new()
            .name(&self.name)
            .check(!is_blank(&self.list_name), "List name cannot be empty.")
            .max_len(&self.list_name, MAX_NAME_LEN, "Name cannot exceed 100 characters.")
            .finish()
    }
}
