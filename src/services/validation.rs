use serde_json::Value;
use thiserror::Error;

/// A request body that parsed as JSON but violates the required-field schema
///
/// Carries every violated field from a single validation pass, not just the
/// first one found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {}", messages.join(", "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

/// Validated create/update list request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedListRequest {
    pub name: String,
    pub deadline_date: String,
}

/// Validated create/update item request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItemRequest {
    pub name: String,
    pub is_done: bool,
}

/// Check a list request body: listName and deadlineDate are required
/// non-empty strings
///
/// Used identically for create and update. Structural/presence checks only;
/// no length bounds, no date parsing.
pub fn validate_list_request(body: &Value) -> Result<ValidatedListRequest, ValidationError> {
    let mut messages = Vec::new();

    let name = required_string(body, "listName", &mut messages);
    let deadline_date = required_string(body, "deadlineDate", &mut messages);

    if let (Some(name), Some(deadline_date)) = (name, deadline_date) {
        Ok(ValidatedListRequest {
            name,
            deadline_date,
        })
    } else {
        Err(ValidationError { messages })
    }
}

/// Check an item request body: itemName is a required non-empty string,
/// isDone a required boolean
///
/// Used identically for create and update.
pub fn validate_item_request(body: &Value) -> Result<ValidatedItemRequest, ValidationError> {
    let mut messages = Vec::new();

    let name = required_string(body, "itemName", &mut messages);
    let is_done = required_bool(body, "isDone", &mut messages);

    if let (Some(name), Some(is_done)) = (name, is_done) {
        Ok(ValidatedItemRequest { name, is_done })
    } else {
        Err(ValidationError { messages })
    }
}

// An empty string counts as missing, matching required() semantics of the
// schema this API is contracted against.
fn required_string(body: &Value, field: &str, messages: &mut Vec<String>) -> Option<String> {
    match body.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            messages.push(format!("{} is a required field", field));
            None
        }
        Some(_) => {
            messages.push(format!("{} must be a string", field));
            None
        }
    }
}

fn required_bool(body: &Value, field: &str, messages: &mut Vec<String>) -> Option<bool> {
    match body.get(field) {
        Some(Value::Bool(value)) => Some(*value),
        Some(Value::Null) | None => {
            messages.push(format!("{} is a required field", field));
            None
        }
        Some(_) => {
            messages.push(format!("{} must be a boolean", field));
            None
        }
    }
}
