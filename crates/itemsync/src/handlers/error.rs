use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use itemsync_core::item::{item_error_message, item_error_to_status_code, ItemServiceError};

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Handler error wrapping an [`ItemServiceError`].
///
/// Store errors are logged with their detail and answered with a generic 500.
#[derive(Debug)]
pub struct ApiError(pub ItemServiceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(item_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "API error");
        } else {
            tracing::warn!(status = %status, error = %self.0, "API error");
        }

        let body = ErrorBody {
            error: item_error_message(&self.0),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ItemServiceError> for ApiError {
    fn from(err: ItemServiceError) -> Self {
        Self(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use itemsync_core::storage::RepositoryError;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError(ItemServiceError::NotFound {
            id: "does-not-exist".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "not found" })
        );
    }

    #[tokio::test]
    async fn test_store_error_hides_detail() {
        let response = ApiError(ItemServiceError::Store(RepositoryError::ConnectionFailed(
            "dispatch failure: connection refused".to_string(),
        )))
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Internal server error" })
        );
    }
}
