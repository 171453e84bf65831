//! Request handlers for the `/todos` routes.

use axum::{
    extract::{Path, State},
    Json,
};
use todo_core::{
    CreateTodo, DeleteConfirmation, DeleteOutcome, TodoItem, TodoService, TodoStore,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ApiError;

#[instrument(skip_all)]
pub async fn list_todos<S: TodoStore>(
    State(service): State<TodoService<S>>,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    Ok(Json(service.list().await?))
}

#[instrument(skip_all)]
pub async fn create_todo<S: TodoStore>(
    State(service): State<TodoService<S>>,
    Json(input): Json<CreateTodo>,
) -> Result<Json<TodoItem>, ApiError> {
    Ok(Json(service.create(input).await?))
}

#[instrument(skip(service))]
pub async fn delete_todo<S: TodoStore>(
    State(service): State<TodoService<S>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let id = parse_id(&id)?;
    match service.delete(id).await? {
        DeleteOutcome::Deleted => Ok(Json(DeleteConfirmation::default())),
        DeleteOutcome::NotFound => Err(ApiError::NotFound),
    }
}

/// Reject a malformed path segment before it reaches the store.
fn parse_id(segment: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(segment).map_err(|_| ApiError::InvalidId(segment.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_hyphenated() {
        let id = parse_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn parse_id_rejects_garbage() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, ApiError::InvalidId(ref s) if s == "not-a-uuid"));
    }

    #[test]
    fn parse_id_rejects_truncated() {
        assert!(parse_id("67e55044-10b1-426f-9247").is_err());
    }
}
