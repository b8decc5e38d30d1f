//! Admin organisation management handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::api::doc::ADMIN_TAG;
use crate::api::dto::{
    ApiResponse, ErrorResponse, OrganisationResponse, UpdateOrganisationRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

const ORGANISATION_UPDATED: &str = "Organisation Updated Successfully";

pub fn admin_organisation_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(update_organisation))
}

/// PATCH /api/v1/admin/organisation/{id}
#[utoipa::path(
    patch,
    path = "/organisation/{id}",
    tag = ADMIN_TAG,
    summary = "Admin-Update an existing organisation",
    params(
        ("id" = Uuid, Path, description = "Organisation ID")
    ),
    request_body = UpdateOrganisationRequest,
    responses(
        (status = 200, description = "Organisation updated successfully", body = ApiResponse<OrganisationResponse>),
        (status = 400, description = "Malformed id or body", body = ErrorResponse),
        (status = 404, description = "Organisation not found", body = ErrorResponse),
        (status = 409, description = "Slug already in use", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 503, description = "Database connection unavailable", body = ErrorResponse)
    )
)]
async fn update_organisation(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    ValidatedJson(req): ValidatedJson<UpdateOrganisationRequest>,
) -> AppResult<Json<ApiResponse<OrganisationResponse>>> {
    let Path(id) = id?;
    let organisation = state
        .services
        .organisations
        .update_organisation(id, req.into_update_organisation())
        .await?;
    Ok(Json(ApiResponse::ok(
        ORGANISATION_UPDATED,
        OrganisationResponse::from(organisation),
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::api::handlers::test_support::{app_with, app_with_store, patch_json};
    use crate::services::testing::{FailingAdminService, InMemoryAdminStore, sample_organisation};

    #[tokio::test]
    async fn test_update_organisation_subset() {
        let store = Arc::new(InMemoryAdminStore::default());
        let before = sample_organisation();
        let id = before.id;
        store.insert_organisation(before.clone());

        let (status, body) = patch_json(
            app_with_store(store.clone()),
            &format!("/api/v1/admin/organisation/{id}"),
            r#"{"name": "Acme Holdings", "type": "holding", "country": "Ghana"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Organisation Updated Successfully");
        assert_eq!(body["status_code"], 200);

        let data = &body["data"];
        assert_eq!(data["id"], id.to_string());
        assert_eq!(data["name"], "Acme Holdings");
        assert_eq!(data["type"], "holding");
        assert_eq!(data["country"], "Ghana");
        assert_eq!(data["slug"], "acme");
        assert_eq!(data["address"], before.address);
        assert_eq!(data["created_at"], "2024-01-01T00:00:00.000Z");
        assert_ne!(data["updated_at"], "2024-01-01T00:00:00.000Z");

        let after = store.organisation(id).unwrap();
        assert_eq!(after.industry, before.industry);
        assert_eq!(after.state, before.state);
        assert!(after.updated_at.to_jiff() > before.updated_at.to_jiff());
    }

    #[tokio::test]
    async fn test_update_missing_organisation() {
        let store = Arc::new(InMemoryAdminStore::default());
        let (status, body) = patch_json(
            app_with_store(store),
            &format!("/api/v1/admin/organisation/{}", uuid::Uuid::new_v4()),
            r#"{"name": "Ghost"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Organisation not found");
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn test_update_organisation_bad_email() {
        let store = Arc::new(InMemoryAdminStore::default());
        let organisation = sample_organisation();
        let id = organisation.id;
        store.insert_organisation(organisation);

        let (status, body) = patch_json(
            app_with_store(store),
            &format!("/api/v1/admin/organisation/{id}"),
            r#"{"email": "acme-at-example"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[tokio::test]
    async fn test_update_organisation_malformed_body() {
        let store = Arc::new(InMemoryAdminStore::default());
        let (status, body) = patch_json(
            app_with_store(store),
            &format!("/api/v1/admin/organisation/{}", uuid::Uuid::new_v4()),
            r#"{"name": "#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_update_organisation_pool_exhausted() {
        let failing = Arc::new(FailingAdminService);
        let (status, body) = patch_json(
            app_with(failing.clone(), failing),
            &format!("/api/v1/admin/organisation/{}", uuid::Uuid::new_v4()),
            r#"{"slug": "acme-2"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "service unavailable");
        assert_eq!(body["message"], "Database connection unavailable");
    }
}
