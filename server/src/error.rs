//! HTTP error mapping.
//!
//! Only the not-found and malformed-id cases carry a designed payload.
//! Store faults are logged and surface as an opaque 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todo_core::{ErrorDetail, StoreError};
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo not found")]
    NotFound,

    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidId(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(err) => {
                error!(error = %err, "store operation failed");
                return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
            }
        };
        (status, Json(ErrorDetail::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_has_fixed_detail() {
        let resp = ApiError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(resp).await, r#"{"detail":"Todo not found"}"#);
    }

    #[tokio::test]
    async fn invalid_id_is_unprocessable() {
        let resp = ApiError::InvalidId("abc".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_string(resp).await, r#"{"detail":"Invalid todo id: abc"}"#);
    }

    #[tokio::test]
    async fn store_error_is_opaque() {
        let resp = ApiError::from(StoreError::backend("secret connection string")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(resp).await;
        assert_eq!(body, "Internal Server Error");
        assert!(!body.contains("secret"));
    }
}
