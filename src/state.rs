//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::time::Duration;

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// Admin services, held as trait objects
    pub services: Services,
    /// Pool used directly by the health checks; absent when the services
    /// are not backed by Postgres
    pub db_pool: Option<AsyncDbPool>,
    /// Upper bound on the time a single request may take
    pub request_timeout: Duration,
}

impl AppState {
    /// Wires repositories and services over the given pool.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::new(pool, Duration::from_secs(30));
    /// ```
    pub fn new(pool: AsyncDbPool, request_timeout: Duration) -> Self {
        let repos = Repositories::new(pool.clone());
        Self {
            services: Services::new(repos),
            db_pool: Some(pool),
            request_timeout,
        }
    }

    /// State around already-built services, without a database pool.
    pub fn from_services(services: Services, request_timeout: Duration) -> Self {
        Self {
            services,
            db_pool: None,
            request_timeout,
        }
    }
}
