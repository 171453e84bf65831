//! The todo service: id generation and store outcome mapping.
//!
//! # Design
//! `TodoService` holds only a shared store handle and carries no other
//! state between calls. Each operation issues a single store call; failures
//! are returned as-is and never retried.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::store::TodoStore;
use crate::types::{CreateTodo, TodoItem};

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Create/list/delete over a single todo collection.
#[derive(Debug)]
pub struct TodoService<S> {
    store: Arc<S>,
}

// Manual impl so `S` itself need not be `Clone`.
impl<S> Clone for TodoService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Pair the caller's content with a fresh id and persist it.
    pub async fn create(&self, input: CreateTodo) -> StoreResult<TodoItem> {
        let item = TodoItem {
            id: Uuid::new_v4(),
            content: input.content,
        };
        self.store.insert(&item).await?;
        debug!(id = %item.id, "todo created");
        Ok(item)
    }

    pub async fn list(&self) -> StoreResult<Vec<TodoItem>> {
        self.store.list().await
    }

    pub async fn delete(&self, id: Uuid) -> StoreResult<DeleteOutcome> {
        let removed = self.store.delete(id).await?;
        if removed == 0 {
            debug!(%id, "todo not found");
            return Ok(DeleteOutcome::NotFound);
        }
        debug!(%id, "todo deleted");
        Ok(DeleteOutcome::Deleted)
    }
}
