//! Error handler for converting AppError to HTTP responses.
//!
//! Every failure leaves the server as an [`ErrorResponse`] envelope. Source
//! chains are logged here and never serialized.

use axum::{
    Json,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::{AppError, INTERNAL_SERVER_ERROR_MESSAGE};

/// Upper bound on framework error bodies read back by [`global_error_handler`].
const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                error = %self,
                cause = %source_chain(&self),
                "Request failed"
            );
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorResponse::new(status, self.public_message());
        let body = match self {
            AppError::ValidationErrors { errors } => body.with_errors(errors),
            _ => body,
        };

        (status, Json(body)).into_response()
    }
}

/// Rewrites error responses that are not JSON into the error envelope.
///
/// Covers rejections produced by axum itself, such as unknown routes, wrong
/// methods and timeouts from the tower layers.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let (_parts, body) = response.into_parts();
    let original = axum::body::to_bytes(body, MAX_ERROR_BODY_BYTES)
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
        .unwrap_or_default();

    let message = if status.is_server_error() {
        if !original.is_empty() {
            tracing::error!(status = status.as_u16(), body = %original, "Unhandled server error");
        }
        match status {
            StatusCode::SERVICE_UNAVAILABLE => "Service temporarily unavailable".to_string(),
            _ => INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
        }
    } else if !original.is_empty() {
        original
    } else {
        default_client_message(status).to_string()
    };

    (status, Json(ErrorResponse::new(status, message))).into_response()
}

/// Joins every `source()` below `error`, outermost first.
fn source_chain(error: &dyn std::error::Error) -> String {
    let mut causes = Vec::new();
    let mut current = error.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes.join(": ")
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"))
}

fn default_client_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "The requested resource was not found",
        StatusCode::METHOD_NOT_ALLOWED => "HTTP method not allowed for this endpoint",
        StatusCode::REQUEST_TIMEOUT => "Request timeout",
        StatusCode::PAYLOAD_TOO_LARGE => "Request payload too large",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "Unsupported media type",
        _ => "Bad request - invalid or malformed request",
    }
}
