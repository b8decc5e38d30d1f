//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{
    Router,
    http::{HeaderName, Method, header::CONTENT_TYPE},
    middleware,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{
    REQUEST_ID_HEADER, global_error_handler, logging_middleware, request_id_middleware,
};
use crate::state::AppState;

/// Prefix of every admin endpoint.
pub const ADMIN_API_PREFIX: &str = "/api/v1/admin";

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Layers run outermost first:
/// 1. Request ID - generates or propagates `X-Request-ID`
/// 2. Logging - `http_request` span and timing
/// 3. Global error handler - wraps non-JSON error responses
/// 4. Timeout, CORS and compression
///
/// # Routes
/// - `/api/v1/admin/users`, `/api/v1/admin/users/{id}`
/// - `/api/v1/admin/organisation/{id}`
/// - `/health`, `/health/ready`, `/health/live`
/// - `/swagger-ui`, `/api-docs/openapi.json`
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PATCH])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)]);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(ADMIN_API_PREFIX, handlers::admin_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TimeoutLayer::new(request_timeout))
        // Last added runs first
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
