//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `user` / `organisation` - admin request bodies and record projections
//! - `envelope` - the `{success, message, data, status_code}` wrapper
//! - `error` - error response body
//! - `health` - health probe bodies
//! - `pagination` - query parsing and page metadata

mod envelope;
mod error;
mod health;
mod organisation;
mod pagination;
mod user;

pub use envelope::ApiResponse;
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use organisation::{OrganisationResponse, UpdateOrganisationRequest};
pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, PaginationMeta, PaginationParams, PaginationQuery};
pub use user::{UpdateUserRequest, UserListResponse, UserResponse, UserSummary};

/// ISO 8601 UTC with millisecond precision, e.g. `2024-01-01T12:00:00.000Z`.
pub fn format_instant(ts: jiff::Timestamp) -> String {
    ts.strftime("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

pub fn format_timestamp(ts: jiff_diesel::Timestamp) -> String {
    format_instant(ts.to_jiff())
}
