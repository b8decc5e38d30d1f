//! Repository layer for data access operations.
//!
//! Async diesel queries for the admin entities.

mod organisation_repo;
mod user_repo;

pub use organisation_repo::OrganisationRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub organisations: OrganisationRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            organisations: OrganisationRepository::new(pool),
        }
    }
}
