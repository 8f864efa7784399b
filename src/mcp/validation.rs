//! Argument and object validation for tool inputs.
//!
//! Both validators aggregate: every missing key or violated rule is
//! reported in one error, joined with ", ".

use rmcp::model::JsonObject;

use super::error::{ToolError, ToolResult};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Check that every required key is present in the raw arguments.
///
/// Only key presence is checked; values are inspected later when the
/// typed input is built.
pub fn require_arguments(arguments: &JsonObject, required: &[&str]) -> ToolResult<()> {
    let present = arguments
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let missing: Vec<String> = required
        .iter()
        .filter(|key| !arguments.contains_key(**key))
        .map(|key| format!("Missing required field: '{}'. Got: {}", key, present))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ToolError::Argument {
            message: missing.join(", "),
        })
    }
}

/// Accumulates constraint violations on a typed input.
#[derive(Debug, Default)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` unless `ok` holds.
    pub fn check(&mut self, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.messages.push(message.to_string());
        }
        self
    }

    /// Required non-empty name of at most [`MAX_NAME_LEN`] characters.
    pub fn name(&mut self, value: &str) -> &mut Self {
        self.bounded(
            value,
            MAX_NAME_LEN,
            "Name cannot be empty.",
            "Name cannot exceed 100 characters.",
        )
    }

    /// Required non-empty description of at most [`MAX_DESCRIPTION_LEN`] characters.
    pub fn description(&mut self, value: &str) -> &mut Self {
        self.bounded(
            value,
            MAX_DESCRIPTION_LEN,
            "Description cannot be empty.",
            "Description cannot exceed 250 characters.",
        )
    }

    /// Length cap only; empty is allowed.
    pub fn max_len(&mut self, value: &str, max: usize, message: &str) -> &mut Self {
        self.check(within(value, max), message)
    }

    fn bounded(&mut self, value: &str, max: usize, empty: &str, too_long: &str) -> &mut Self {
        if is_blank(value) {
            self.check(false, empty)
        } else {
            self.max_len(value, max, too_long)
        }
    }

    pub fn finish(&mut self) -> ToolResult<()> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ToolError::Validation {
                message: std::mem::take(&mut self.messages).join(", "),
            })
        }
    }
}

/// Empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn within(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}
