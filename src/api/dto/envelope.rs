//! Success envelope shared by single-record responses.

use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

/// `{success, message, data, status_code}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub message: String,
    pub data: T,
    #[schema(example = 200)]
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    /// 200 envelope around `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            status_code: StatusCode::OK.as_u16(),
        }
    }
}
