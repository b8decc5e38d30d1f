//! Service contracts used by the admin handlers.
//!
//! Handlers only see these traits through `AppState`, so they can run
//! against the Postgres implementations or an in-memory double.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Organisation, PaginatedUsers, UpdateOrganisation, UpdateUser, User};

/// User operations exposed to the admin API.
#[async_trait]
pub trait AdminUserService: Send + Sync {
    /// Applies the provided fields to an existing user.
    ///
    /// Fails with `NotFound` when no user has this id.
    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User>;

    /// Returns the slice for `page` together with the total user count.
    ///
    /// Does not check `page` against the page count; callers decide what an
    /// out-of-range page means.
    async fn get_paginated_users(&self, page: u64, limit: u64) -> AppResult<PaginatedUsers>;
}

/// Organisation operations exposed to the admin API.
#[async_trait]
pub trait AdminOrganisationService: Send + Sync {
    /// Applies the provided fields to an existing organisation.
    ///
    /// Fails with `NotFound` when no organisation has this id.
    async fn update_organisation(
        &self,
        id: Uuid,
        changes: UpdateOrganisation,
    ) -> AppResult<Organisation>;
}

/// SQL `(offset, limit)` for a 1-based page.
///
/// Zero values are invalid query params. Large values saturate at
/// `i64::MAX`; such an offset selects nothing and the caller's last-page
/// check reports it.
pub fn page_window(page: u64, limit: u64) -> AppResult<(i64, i64)> {
    if page == 0 || limit == 0 {
        return Err(AppError::invalid_query_params());
    }

    let offset = (page - 1).saturating_mul(limit);
    let offset = i64::try_from(offset).unwrap_or(i64::MAX);
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);

    Ok((offset, limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_first_pages() {
        assert_eq!(page_window(1, 5).unwrap(), (0, 5));
        assert_eq!(page_window(3, 5).unwrap(), (10, 5));
    }

    #[test]
    fn test_page_window_rejects_zero() {
        for (page, limit) in [(0, 5), (1, 0), (0, 0)] {
            let err = page_window(page, limit).unwrap_err();
            assert_eq!(err.public_message(), "Invalid query params passed");
        }
    }

    #[test]
    fn test_page_window_saturates() {
        assert_eq!(page_window(u64::MAX, 2).unwrap(), (i64::MAX, 2));
        assert_eq!(page_window(1, u64::MAX).unwrap(), (0, i64::MAX));
        assert_eq!(page_window(i64::MAX as u64, 5).unwrap(), (i64::MAX, 5));
    }
}
