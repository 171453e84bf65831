//! Error types for todo stores.
//!
//! # Design
//! Store errors are backend agnostic. A backend translates its own driver
//! errors into `StoreError` so the service and HTTP layers never see driver
//! types.

use thiserror::Error;
use uuid::Uuid;

/// Errors returned by `TodoStore` implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A document with the same primary key already exists.
    #[error("todo already exists: {id}")]
    DuplicateKey { id: Uuid },

    /// Any other backend failure (connectivity, timeout, serialization).
    #[error("store error: {message}")]
    Backend { message: String },
}

impl StoreError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        StoreError::Backend {
            message: err.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
