//! Request failures and their JSON rendering

use asciify::ConvertError;
use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The form carries no field under the configured name
    #[error("No file uploaded")]
    MissingInput,

    /// The body could not be opened as a multipart form
    #[error("unreadable form: {0}")]
    Form(String),

    /// The multipart stream broke while reading a field
    #[error("unreadable upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("{0}")]
    Processing(#[from] ConvertError),

    #[error("conversion timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("conversion worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput => StatusCode::BAD_REQUEST,
            ApiError::Upload(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::Form(_)
            | ApiError::Upload(_)
            | ApiError::Processing(_)
            | ApiError::Timeout(_)
            | ApiError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::MissingInput => ErrorBody {
                error: "No file uploaded".to_string(),
                details: None,
            },
            other => ErrorBody {
                error: "Failed to process image".to_string(),
                details: Some(other.to_string()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Error processing image: {}", self);
        } else {
            log::warn!("Rejected upload ({}): {}", status, self);
        }
        (status, Json(self.body())).into_response()
    }
}
