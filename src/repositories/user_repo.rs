//! User repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, DatabaseErrorConverter};
use crate::models::{UpdateUser, User};

/// User repository holding an async connection pool.
///
/// Cloning shares the underlying pool.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find user"))
    }

    /// Applies a partial update and returns the stored row.
    ///
    /// `None` when the row disappeared between lookup and update.
    pub async fn update(
        &self,
        user_id: Uuid,
        update_data: UpdateUser,
    ) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(users.filter(id.eq(user_id)))
            .set(&update_data)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update user"))
    }

    /// Total number of users.
    pub async fn count(&self) -> Result<u64, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        let total: i64 = users
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "count users"))?;

        // COUNT(*) is never negative
        Ok(total.unsigned_abs())
    }

    /// One page of users in creation order.
    ///
    /// Ties on `created_at` are broken by `id` so pages never overlap.
    pub async fn list_paginated(&self, offset: i64, limit: i64) -> Result<Vec<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .select(User::as_select())
            .order((created_at.asc(), id.asc()))
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "list users"))
    }
}
