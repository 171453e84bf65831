//! Domain core for the todo service.
//!
//! # Overview
//! Defines the todo entity, the store abstraction and the service that sits
//! between the HTTP layer and the store. Nothing here knows about HTTP or a
//! particular database.
//!
//! # Design
//! - `TodoService` generates ids and maps store results to outcomes.
//! - `TodoStore` is implemented by `MemoryStore` here and by the MongoDB
//!   store in the server crate.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use service::{DeleteOutcome, TodoService};
pub use store::{MemoryStore, TodoStore};
pub use types::{CreateTodo, DeleteConfirmation, ErrorDetail, TodoItem};
