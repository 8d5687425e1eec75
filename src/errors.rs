use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("completion request failed: {0}")]
    Completion(#[from] reqwest::Error),
    #[error("completion api returned status {0}")]
    CompletionStatus(StatusCode),
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("template render failed: {0}")]
    Render(#[from] askama::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// Single boundary: handlers bubble everything up with `?`, the client only
// ever sees a 400 for blank input or a generic 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::EmptyMessage => (StatusCode::BAD_REQUEST, "message must not be empty"),
            err => {
                tracing::error!("chat flow failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to process request")
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn blank_input_maps_to_400() {
        let response = Error::EmptyMessage.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "message must not be empty");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_generic_500() {
        let response = Error::CompletionStatus(StatusCode::BAD_GATEWAY).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "failed to process request");
    }

    #[tokio::test]
    async fn render_failure_is_not_leaked_to_the_client() {
        let response = Error::Render(askama::Error::from(std::fmt::Error)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "failed to process request");
    }
}
