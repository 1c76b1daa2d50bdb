use std::fmt;
use thiserror::Error;

/// Resource kinds a lookup by id can miss on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    TodoList,
    TodoItem,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::TodoList => write!(f, "todoList"),
            ResourceKind::TodoItem => write!(f, "todoItem"),
        }
    }
}

/// A lookup by identifier yielded no record
///
/// Carries the resource kind and the searched id. The Display form is the
/// exact message rendered in 404 response bodies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not found {kind} with id {id}")]
pub struct NotFoundError {
    pub kind: ResourceKind,
    pub id: String,
}

impl NotFoundError {
    /// Create a not-found error for a list id
    pub fn todo_list(id: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::TodoList,
            id: id.into(),
        }
    }

    /// Create a not-found error for an item id
    pub fn todo_item(id: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::TodoItem,
            id: id.into(),
        }
    }
}
