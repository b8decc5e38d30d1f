//! Postgres-backed organisation service.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Organisation, UpdateOrganisation};
use crate::repositories::OrganisationRepository;
use crate::services::admin::AdminOrganisationService;

#[derive(Clone)]
pub struct OrganisationService {
    repo: OrganisationRepository,
}

impl OrganisationService {
    pub fn new(repo: OrganisationRepository) -> Self {
        Self { repo }
    }

    pub async fn get_organisation(&self, id: Uuid) -> AppResult<Organisation> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found_by_id("Organisation", id))
    }
}

#[async_trait]
impl AdminOrganisationService for OrganisationService {
    async fn update_organisation(
        &self,
        id: Uuid,
        changes: UpdateOrganisation,
    ) -> AppResult<Organisation> {
        tracing::debug!(organisation_id = %id, ?changes, "Updating organisation");

        self.get_organisation(id).await?;

        let organisation = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found_by_id("Organisation", id))?;

        tracing::info!(organisation_id = %organisation.id, slug = %organisation.slug, "Organisation updated");
        Ok(organisation)
    }
}
