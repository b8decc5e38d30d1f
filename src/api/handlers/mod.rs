//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod admin_organisations;
pub mod admin_users;
pub mod health;

use utoipa_axum::router::OpenApiRouter;

use crate::state::AppState;

/// Routes mounted under `/api/v1/admin`.
pub fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(admin_users::admin_user_routes())
        .merge(admin_organisations::admin_organisation_routes())
}
