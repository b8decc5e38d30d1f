//! In-memory service doubles for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    Organisation, PaginatedUsers, UpdateOrganisation, UpdateUser, User, UserRole,
};
use crate::services::admin::{AdminOrganisationService, AdminUserService, page_window};

/// Stores users and organisations in vectors and implements both service
/// traits with the same semantics as the Postgres services.
#[derive(Default)]
pub struct InMemoryAdminStore {
    users: Mutex<Vec<User>>,
    organisations: Mutex<Vec<Organisation>>,
}

/// Timestamp `minutes` after 2024-01-01T00:00:00Z.
pub fn fixed_time(minutes: i64) -> jiff_diesel::Timestamp {
    let base = jiff::Timestamp::from_second(1_704_067_200).unwrap();
    jiff_diesel::Timestamp::from(base + jiff::SignedDuration::from_mins(minutes))
}

pub fn sample_user(n: i64) -> User {
    User {
        id: Uuid::new_v4(),
        name: format!("User {n}"),
        email: format!("user{n}@example.com"),
        password: "$argon2id$v=19$hash".to_string(),
        role: UserRole::User,
        is_verified: false,
        created_at: fixed_time(n),
        updated_at: fixed_time(n),
    }
}

pub fn sample_organisation() -> Organisation {
    Organisation {
        id: Uuid::new_v4(),
        name: "Acme".to_string(),
        email: "contact@acme.test".to_string(),
        slug: "acme".to_string(),
        org_type: "company".to_string(),
        industry: "Manufacturing".to_string(),
        state: "Lagos".to_string(),
        country: "Nigeria".to_string(),
        address: "1 Acme Way".to_string(),
        created_at: fixed_time(0),
        updated_at: fixed_time(0),
    }
}

impl InMemoryAdminStore {
    pub fn with_users(count: i64) -> Self {
        let store = Self::default();
        store
            .users
            .lock()
            .unwrap()
            .extend((1..=count).map(sample_user));
        store
    }

    pub fn insert_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn insert_organisation(&self, organisation: Organisation) {
        self.organisations.lock().unwrap().push(organisation);
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    pub fn organisation(&self, id: Uuid) -> Option<Organisation> {
        self.organisations
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }
}

#[async_trait]
impl AdminUserService for InMemoryAdminStore {
    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        if let Some(email) = &changes.email
            && users.iter().any(|u| u.id != id && &u.email == email)
        {
            return Err(AppError::Duplicate {
                entity: "User".to_string(),
                field: "email".to_string(),
                value: email.clone(),
            });
        }

        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found_by_id("User", id))?;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        if let Some(is_verified) = changes.is_verified {
            user.is_verified = is_verified;
        }
        user.updated_at = changes.updated_at;

        Ok(user.clone())
    }

    async fn get_paginated_users(&self, page: u64, limit: u64) -> AppResult<PaginatedUsers> {
        let (offset, limit) = page_window(page, limit)?;

        let mut users = self.users.lock().unwrap().clone();
        users.sort_by_key(|u| (u.created_at.to_jiff(), u.id));
        let total_users = users.len() as u64;

        let users = users
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok(PaginatedUsers { users, total_users })
    }
}

#[async_trait]
impl AdminOrganisationService for InMemoryAdminStore {
    async fn update_organisation(
        &self,
        id: Uuid,
        changes: UpdateOrganisation,
    ) -> AppResult<Organisation> {
        let mut organisations = self.organisations.lock().unwrap();
        let organisation = organisations
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::not_found_by_id("Organisation", id))?;

        let UpdateOrganisation {
            name,
            email,
            slug,
            org_type,
            industry,
            state,
            country,
            address,
            updated_at,
        } = changes;

        for (target, value) in [
            (&mut organisation.name, name),
            (&mut organisation.email, email),
            (&mut organisation.slug, slug),
            (&mut organisation.org_type, org_type),
            (&mut organisation.industry, industry),
            (&mut organisation.state, state),
            (&mut organisation.country, country),
            (&mut organisation.address, address),
        ] {
            if let Some(value) = value {
                *target = value;
            }
        }
        organisation.updated_at = updated_at;

        Ok(organisation.clone())
    }
}

/// Service double whose every call fails with an unexpected error.
pub struct FailingAdminService;

#[async_trait]
impl AdminUserService for FailingAdminService {
    async fn update_user(&self, _id: Uuid, _changes: UpdateUser) -> AppResult<User> {
        Err(anyhow::anyhow!("connection reset by peer 10.0.0.7").into())
    }

    async fn get_paginated_users(&self, _page: u64, _limit: u64) -> AppResult<PaginatedUsers> {
        Err(AppError::Database {
            operation: "count users".to_string(),
            source: anyhow::anyhow!("relation \"users\" does not exist"),
        })
    }
}

#[async_trait]
impl AdminOrganisationService for FailingAdminService {
    async fn update_organisation(
        &self,
        _id: Uuid,
        _changes: UpdateOrganisation,
    ) -> AppResult<Organisation> {
        Err(AppError::ConnectionPool {
            source: anyhow::anyhow!("timed out waiting for connection"),
        })
    }
}
