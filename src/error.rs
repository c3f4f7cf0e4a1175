//! Error types shared by the record store, the query layer and the HTTP handlers.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InventoryError>;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// The backing data file does not exist
    #[error("JSON file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No record carries the requested id
    #[error("Instance not found")]
    InstanceNotFound(i64),

    /// The backing data is not a well-formed instance list
    #[error("Invalid data format: {0}")]
    Format(String),

    /// A request parameter failed validation
    #[error("{0}")]
    Validation(String),

    #[error("Error loading data: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::InstanceNotFound(_) => StatusCode::NOT_FOUND,
            InventoryError::Validation(_) => StatusCode::BAD_REQUEST,
            // A missing data file is a deployment problem, not a missing resource.
            InventoryError::NotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
            InventoryError::Format(_) => StatusCode::INTERNAL_SERVER_ERROR,
            InventoryError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: u16,
}

impl From<&InventoryError> for ErrorResponse {
    fn from(err: &InventoryError) -> Self {
        let status = err.status_code();
        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            format!("Internal server error: {}", err)
        } else {
            err.to_string()
        };
        Self {
            detail,
            code: status.as_u16(),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
