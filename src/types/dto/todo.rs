use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::not_found::NotFoundError;

/// A single task entry belonging to exactly one list
///
/// Items have no existence of their own: they live inside their parent
/// list's document and are persisted only as part of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToDoItem {
    /// Unique identifier, generated on creation, immutable thereafter
    pub item_id: String,

    /// Name of the task
    pub name: String,

    /// Completion flag
    pub is_done: bool,

    /// Timestamp when the item was created (ISO 8601 format)
    pub create_date: String,
}

impl ToDoItem {
    /// Build a fresh item with a generated id and creation timestamp
    pub fn new(name: impl Into<String>, is_done: bool) -> Self {
        Self {
            item_id: Uuid::new_v4().to_string(),
            name: name.into(),
            is_done,
            create_date: now_iso8601(),
        }
    }
}

/// A named collection of items with a deadline, owned by a user
///
/// Serializes with camelCase keys; this shape is both the wire JSON and the
/// persisted document. The item collection may be absent or empty - the two
/// states are treated as equivalent everywhere items are read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToDoList {
    /// Unique identifier, generated on creation, primary key in the store
    pub list_id: String,

    /// Name of the list
    pub name: String,

    /// Deadline as an ISO 8601 string (only checked non-empty)
    pub deadline_date: String,

    /// Owner identifier
    pub user_id: String,

    /// Timestamp when the list was created (ISO 8601 format)
    pub create_date: String,

    /// Ordered item collection, insertion order significant
    ///
    /// Absent and empty are equivalent "no items" states; documents written
    /// before the collection existed may omit the key entirely.
    #[serde(default)]
    pub items: Option<Vec<ToDoItem>>,
}

impl ToDoList {
    /// Build a fresh list with a generated id, an empty item collection and
    /// a synthesized owner
    pub fn new(name: impl Into<String>, deadline_date: impl Into<String>) -> Self {
        Self {
            list_id: Uuid::new_v4().to_string(),
            name: name.into(),
            deadline_date: deadline_date.into(),
            // TODO take the owner from an authenticated identity once auth exists
            user_id: format!("user_{}", Uuid::new_v4()),
            create_date: now_iso8601(),
            items: Some(Vec::new()),
        }
    }

    /// Append an item, creating the collection when it is absent
    pub fn add_item(&mut self, item: ToDoItem) {
        match self.items.as_mut() {
            Some(items) => items.push(item),
            None => self.items = Some(vec![item]),
        }
    }

    /// Locate an item by id inside this list
    ///
    /// Returns the position rather than a detached copy so the caller can
    /// mutate the entry that is about to be persisted. When duplicate ids
    /// exist the first match in collection order wins.
    pub fn item_position(&self, item_id: &str) -> Result<usize, NotFoundError> {
        self.items
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .position(|item| item.item_id == item_id)
            .ok_or_else(|| NotFoundError::todo_item(item_id))
    }

    /// Locate an item by id and borrow it mutably
    pub fn item_mut(&mut self, item_id: &str) -> Result<&mut ToDoItem, NotFoundError> {
        self.items
            .as_mut()
            .and_then(|items| items.iter_mut().find(|item| item.item_id == item_id))
            .ok_or_else(|| NotFoundError::todo_item(item_id))
    }

    /// Remove an item by id, preserving the order of the remainder
    pub fn remove_item(&mut self, item_id: &str) -> Result<ToDoItem, NotFoundError> {
        let position = self.item_position(item_id)?;
        match self.items.as_mut() {
            Some(items) => Ok(items.remove(position)),
            None => Err(NotFoundError::todo_item(item_id)),
        }
    }
}

/// Current time in the ISO 8601 shape used for all createDate fields
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
