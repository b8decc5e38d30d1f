//! Service layer for business logic operations.
//!
//! Services sit between the handlers and the repositories. Handlers hold
//! them as trait objects so tests can swap in in-memory doubles.

mod admin;
mod organisation_service;
mod user_service;

#[cfg(test)]
pub(crate) mod testing;

pub use admin::{AdminOrganisationService, AdminUserService, page_window};
pub use organisation_service::OrganisationService;
pub use user_service::UserService;

use std::sync::Arc;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn AdminUserService>,
    pub organisations: Arc<dyn AdminOrganisationService>,
}

impl Services {
    /// Wires the Postgres-backed services from repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            users: Arc::new(UserService::new(repos.users)),
            organisations: Arc::new(OrganisationService::new(repos.organisations)),
        }
    }

    /// Builds from arbitrary implementations, e.g. test doubles.
    pub fn from_parts(
        users: Arc<dyn AdminUserService>,
        organisations: Arc<dyn AdminOrganisationService>,
    ) -> Self {
        Self {
            users,
            organisations,
        }
    }
}
