//! Domain DTOs for the todo service.
//!
//! # Design
//! `TodoItem` is both the stored entity and the response body. Identifiers
//! are never accepted from callers: `CreateTodo` carries only `content`, and
//! the service pairs it with a freshly generated id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Todo deleted successfully";

/// Detail returned when a delete targets an id with no matching todo.
pub const NOT_FOUND_DETAIL: &str = "Todo not found";

/// A single persisted todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub content: String,
}

/// Request payload for creating a new todo. Any string is accepted,
/// including the empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub content: String,
}

/// Response payload confirming a delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
        }
    }
}

/// Client-facing failure payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
