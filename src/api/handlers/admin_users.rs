//! Admin user management handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::api::doc::ADMIN_TAG;
use crate::api::dto::{
    ApiResponse, ErrorResponse, PaginationMeta, PaginationParams, PaginationQuery,
    UpdateUserRequest, UserListResponse, UserResponse, UserSummary,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

const USER_UPDATED: &str = "User Updated Successfully";
const USERS_RETRIEVED: &str = "Users retrieved successfully";

/// Creates admin user routes.
///
/// Routes:
/// - GET /users         - Paginated user listing
/// - PATCH /users/{id}  - Partial user update
pub fn admin_user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_users))
        .routes(routes!(update_user))
}

/// PATCH /api/v1/admin/users/{id}
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = ADMIN_TAG,
    summary = "Admin-Update an existing user",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = ApiResponse<UserResponse>),
        (status = 400, description = "Malformed id or body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let Path(id) = id?;
    let user = state
        .services
        .users
        .update_user(id, req.into_update_user())
        .await?;
    Ok(Json(ApiResponse::ok(USER_UPDATED, UserResponse::from(user))))
}

/// GET /api/v1/admin/users?page=&limit=
#[utoipa::path(
    get,
    path = "/users",
    tag = ADMIN_TAG,
    summary = "Admin-List users with pagination",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Users retrieved successfully", body = UserListResponse),
        (status = 400, description = "Invalid query params or page past the end", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> AppResult<Json<UserListResponse>> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Unparseable pagination query");
        AppError::invalid_query_params()
    })?;
    let params = PaginationParams::try_from(query)?;

    let page = state
        .services
        .users
        .get_paginated_users(params.page, params.limit)
        .await?;
    let total_pages = params.ensure_within(page.total_users)?;

    Ok(Json(UserListResponse {
        success: true,
        message: USERS_RETRIEVED.to_string(),
        users: page.users.into_iter().map(UserSummary::from).collect(),
        pagination: PaginationMeta {
            total_users: page.total_users,
            total_pages,
            current_page: params.page,
        },
        status_code: 200,
    }))
}
