//! User-related DTOs for the admin API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::format_timestamp;
use super::pagination::PaginationMeta;
use crate::models::{UpdateUser, User, UserRole};

// ============================================================================
// Request DTOs
// ============================================================================

/// Partial user update; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255)]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: Option<String>,

    pub role: Option<UserRole>,

    #[serde(rename = "isverified")]
    pub is_verified: Option<bool>,
}

impl UpdateUserRequest {
    /// Builds the changeset, stamping `updated_at` with the current time.
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            name: self.name,
            email: self.email,
            role: self.role,
            is_verified: self.is_verified,
            ..UpdateUser::touch()
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// User projection returned by the update endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(rename = "isverified")]
    pub is_verified: bool,
    #[serde(rename = "createdAt")]
    #[schema(format = DateTime)]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    #[schema(format = DateTime)]
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            is_verified: user.is_verified,
            created_at: format_timestamp(user.created_at),
            updated_at: format_timestamp(user.updated_at),
        }
    }
}

/// User entry in the paginated listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub name: String,
    pub email: String,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            created_at: format_timestamp(user.created_at),
            updated_at: format_timestamp(user.updated_at),
        }
    }
}

/// `{success, message, users, pagination, status_code}`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Users retrieved successfully")]
    pub message: String,
    pub users: Vec<UserSummary>,
    pub pagination: PaginationMeta,
    #[schema(example = 200)]
    pub status_code: u16,
}
