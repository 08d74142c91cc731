use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use sightline_quicksight::QuickSightError;

/// Main API error type that all handlers return.
///
/// The wire contract has exactly two kinds: a locally detected
/// invalid request, and a failure forwarded from the vendor.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{summary}: {message}")]
    Provider { summary: String, message: String },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap a vendor failure, keeping the vendor message intact.
    pub fn provider(summary: impl Into<String>, source: QuickSightError) -> Self {
        Self::Provider {
            summary: summary.into(),
            message: source.to_string(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation(message) => {
                tracing::info!(error = %message, "Rejected invalid request");
                json!({ "error": message })
            }
            ApiError::Provider { summary, message } => {
                error!(error = %message, "{}", summary);
                json!({ "error": summary, "message": message })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
