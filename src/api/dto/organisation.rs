//! Organisation DTOs for the admin API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::format_timestamp;
use crate::models::{Organisation, UpdateOrganisation};

/// Partial organisation update; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateOrganisationRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100, message = "Type must be between 1 and 100 characters"))]
    pub org_type: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Industry must be between 1 and 100 characters"))]
    pub industry: Option<String>,

    #[validate(length(min = 1, max = 100, message = "State must be between 1 and 100 characters"))]
    pub state: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Country must be between 1 and 100 characters"))]
    pub country: Option<String>,

    #[validate(length(min = 1, message = "Address cannot be empty"))]
    pub address: Option<String>,
}

impl UpdateOrganisationRequest {
    pub fn into_update_organisation(self) -> UpdateOrganisation {
        UpdateOrganisation {
            name: self.name,
            email: self.email,
            slug: self.slug,
            org_type: self.org_type,
            industry: self.industry,
            state: self.state,
            country: self.country,
            address: self.address,
            ..UpdateOrganisation::touch()
        }
    }
}

/// Organisation projection returned by the update endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrganisationResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub org_type: String,
    pub industry: String,
    pub state: String,
    pub country: String,
    pub address: String,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

impl From<Organisation> for OrganisationResponse {
    fn from(org: Organisation) -> Self {
        Self {
            id: org.id,
            name: org.name,
            email: org.email,
            slug: org.slug,
            org_type: org.org_type,
            industry: org.industry,
            state: org.state,
            country: org.country,
            address: org.address,
            created_at: format_timestamp(org.created_at),
            updated_at: format_timestamp(org.updated_at),
        }
    }
}
