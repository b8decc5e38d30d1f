use utoipa::OpenApi;

pub const ADMIN_TAG: &str = "Admin";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admin API",
        description = "Administrative endpoints for managing users and organisations",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::error::ValidationFieldError,
            crate::models::UserRole,
        )
    ),
    tags(
        (name = ADMIN_TAG, description = "Admin Related Routes"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
