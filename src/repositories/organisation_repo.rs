//! Organisation repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, DatabaseErrorConverter};
use crate::models::{Organisation, UpdateOrganisation};

#[derive(Clone)]
pub struct OrganisationRepository {
    pool: AsyncDbPool,
}

impl OrganisationRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, org_id: Uuid) -> Result<Option<Organisation>, AppError> {
        use crate::schema::organisations::dsl::*;
        let mut conn = self.pool.get().await?;

        organisations
            .filter(id.eq(org_id))
            .select(Organisation::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find organisation"))
    }

    /// Applies a partial update and returns the stored row.
    pub async fn update(
        &self,
        org_id: Uuid,
        update_data: UpdateOrganisation,
    ) -> Result<Option<Organisation>, AppError> {
        use crate::schema::organisations::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(organisations.filter(id.eq(org_id)))
            .set(&update_data)
            .returning(Organisation::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update organisation"))
    }
}
