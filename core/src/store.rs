//! Persistence abstraction for todo items.
//!
//! # Design
//! `TodoStore` is the only seam between the service and the database. Every
//! method maps to exactly one store round-trip, so there is never a
//! multi-step operation to coordinate. `MemoryStore` keeps items in
//! insertion order, which stands in for a document store's natural order.

use std::{future::Future, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::types::TodoItem;

/// A collection of todo items keyed by id.
pub trait TodoStore: Send + Sync + 'static {
    /// Persist a new item as a single document. Fails with
    /// `StoreError::DuplicateKey` if the id is already present.
    fn insert(&self, item: &TodoItem) -> impl Future<Output = StoreResult<()>> + Send;

    /// Every item in the collection, unfiltered.
    fn list(&self) -> impl Future<Output = StoreResult<Vec<TodoItem>>> + Send;

    /// Remove the item with the given id. Returns the number of documents
    /// removed, which is 0 or 1.
    fn delete(&self, id: Uuid) -> impl Future<Output = StoreResult<u64>> + Send;
}

/// In-process store. Clones share the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<Vec<TodoItem>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    async fn insert(&self, item: &TodoItem) -> StoreResult<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::DuplicateKey { id: item.id });
        }
        items.push(item.clone());
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<TodoItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<u64> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
