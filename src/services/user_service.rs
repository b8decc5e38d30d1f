//! Postgres-backed user service.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{PaginatedUsers, UpdateUser, User};
use crate::repositories::UserRepository;
use crate::services::admin::{AdminUserService, page_window};

/// User service backed by [`UserRepository`].
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Gets a user by id, or `NotFound`.
    pub async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found_by_id("User", id))
    }
}

#[async_trait]
impl AdminUserService for UserService {
    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User> {
        tracing::debug!(user_id = %id, ?changes, "Updating user");

        // Verify user exists first
        self.get_user(id).await?;

        let user = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found_by_id("User", id))?;

        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    async fn get_paginated_users(&self, page: u64, limit: u64) -> AppResult<PaginatedUsers> {
        let (offset, limit) = page_window(page, limit)?;
        tracing::debug!(page, offset, limit, "Listing users");

        let total_users = self.repo.count().await?;
        let users = self.repo.list_paginated(offset, limit).await?;

        Ok(PaginatedUsers { users, total_users })
    }
}
