//! Error response DTOs.

use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ValidationFieldError;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    #[schema(example = false)]
    pub success: bool,
    /// Lower-cased canonical reason phrase of `status_code`
    #[schema(example = "bad request")]
    pub status: String,
    #[schema(example = "Invalid query params passed")]
    pub message: String,
    #[schema(example = 400)]
    pub status_code: u16,
    /// Per-field failures, only present for body validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationFieldError>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status: status
                .canonical_reason()
                .unwrap_or("error")
                .to_lowercase(),
            message: message.into(),
            status_code: status.as_u16(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<ValidationFieldError>) -> Self {
        self.errors = Some(errors);
        self
    }
}
