//! Pagination query parsing and page arithmetic.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 5;

/// Raw `page`/`limit` query values.
///
/// Kept as strings so a value like `1.5` or `abc` reaches the lenient
/// parse instead of failing deserialization.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number (1-based), defaults to 1
    #[param(value_type = Option<u64>, minimum = 1, example = 1)]
    pub page: Option<String>,

    /// Items per page, defaults to 5
    #[param(value_type = Option<u64>, minimum = 1, example = 5)]
    pub limit: Option<String>,
}

/// Validated pagination request; both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub limit: u64,
}

impl TryFrom<PaginationQuery> for PaginationParams {
    type Error = AppError;

    fn try_from(query: PaginationQuery) -> AppResult<Self> {
        Ok(Self {
            page: parse_positive(query.page.as_deref(), DEFAULT_PAGE)?,
            limit: parse_positive(query.limit.as_deref(), DEFAULT_LIMIT)?,
        })
    }
}

impl PaginationParams {
    /// `ceil(total / limit)`
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }

    /// Checks the requested page against `total` records and returns the
    /// page count.
    ///
    /// Page 1 of an empty set is allowed and yields zero pages.
    pub fn ensure_within(&self, total: u64) -> AppResult<u64> {
        let total_pages = self.total_pages(total);
        let empty_first_page = total_pages == 0 && self.page == 1;

        if self.page > total_pages && !empty_first_page {
            return Err(AppError::bad_request(format!(
                "last page reached page: {}",
                total_pages
            )));
        }

        Ok(total_pages)
    }
}

/// Lenient integer read: optional sign, then the leading digits.
///
/// No digits at all means the default. Zero or negative values are
/// invalid. Values past `u64::MAX` saturate.
fn parse_positive(raw: Option<&str>, default: u64) -> AppResult<u64> {
    let Some(raw) = raw.map(str::trim_start) else {
        return Ok(default);
    };

    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Ok(default);
    }

    let value = unsigned[..digits].parse::<u64>().unwrap_or(u64::MAX);
    if negative || value == 0 {
        return Err(AppError::invalid_query_params());
    }
    Ok(value)
}

/// Pagination block of the user list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[schema(example = 12)]
    pub total_users: u64,
    #[schema(example = 3)]
    pub total_pages: u64,
    #[schema(example = 1)]
    pub current_page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> PaginationQuery {
        PaginationQuery {
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn test_defaults_when_missing_or_empty() {
        let params = PaginationParams::try_from(PaginationQuery::default()).unwrap();
        assert_eq!(params, PaginationParams { page: 1, limit: 5 });

        let params = PaginationParams::try_from(query(Some(""), Some(" "))).unwrap();
        assert_eq!(params, PaginationParams { page: 1, limit: 5 });
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        for (page, limit) in [
            (Some("0"), None),
            (None, Some("0")),
            (Some("-1"), None),
            (None, Some("-5")),
            (Some(" -3"), None),
            (Some("00"), None),
        ] {
            let err = PaginationParams::try_from(query(page, limit)).unwrap_err();
            assert_eq!(
                err.public_message(),
                "Invalid query params passed",
                "page={page:?} limit={limit:?}"
            );
        }
    }

    #[test]
    fn test_non_numeric_falls_back_to_defaults() {
        for (page, limit) in [(Some("abc"), Some("x")), (Some("-abc"), Some(".5"))] {
            let params = PaginationParams::try_from(query(page, limit)).unwrap();
            assert_eq!(params, PaginationParams { page: 1, limit: 5 }, "{page:?}");
        }
    }

    #[test]
    fn test_reads_leading_digits() {
        let params = PaginationParams::try_from(query(Some("1.5"), Some("12abc"))).unwrap();
        assert_eq!(params, PaginationParams { page: 1, limit: 12 });

        let params = PaginationParams::try_from(query(Some(" +2"), Some("3 "))).unwrap();
        assert_eq!(params, PaginationParams { page: 2, limit: 3 });
    }

    #[test]
    fn test_oversized_values_saturate() {
        let params = PaginationParams::try_from(query(Some("99999999999999999999"), None)).unwrap();
        assert_eq!(params.page, u64::MAX);

        let err = params.ensure_within(12).unwrap_err();
        assert_eq!(err.public_message(), "last page reached page: 3");
    }

    #[test]
    fn test_twelve_records_five_per_page() {
        let params = PaginationParams { page: 3, limit: 5 };
        assert_eq!(params.ensure_within(12).unwrap(), 3);

        let params = PaginationParams { page: 4, limit: 5 };
        let err = params.ensure_within(12).unwrap_err();
        assert_eq!(err.public_message(), "last page reached page: 3");
    }

    #[test]
    fn test_empty_set() {
        let first = PaginationParams { page: 1, limit: 5 };
        assert_eq!(first.ensure_within(0).unwrap(), 0);

        let second = PaginationParams { page: 2, limit: 5 };
        assert_eq!(
            second.ensure_within(0).unwrap_err().public_message(),
            "last page reached page: 0"
        );
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = PaginationMeta {
            total_users: 12,
            total_pages: 3,
            current_page: 1,
        };
        let value = serde_json::to_value(meta).unwrap();
        assert_eq!(value["totalUsers"], 12);
        assert_eq!(value["totalPages"], 3);
        assert_eq!(value["currentPage"], 1);
    }

    proptest! {
        /// Every page up to the last one is accepted, the one after is not,
        /// and the page sizes add up to the total.
        #[test]
        fn prop_pages_cover_all_records(total in 1u64..2_000, limit in 1u64..100) {
            let total_pages = PaginationParams { page: 1, limit }.total_pages(total);
            prop_assert!(total_pages * limit >= total);
            prop_assert!((total_pages - 1) * limit < total);

            let mut covered = 0;
            for page in 1..=total_pages {
                let params = PaginationParams { page, limit };
                prop_assert_eq!(params.ensure_within(total).unwrap(), total_pages);
                covered += limit.min(total - (page - 1) * limit);
            }
            prop_assert_eq!(covered, total);

            let past_end = PaginationParams { page: total_pages + 1, limit };
            let message = past_end.ensure_within(total).unwrap_err().public_message();
            prop_assert_eq!(message, format!("last page reached page: {}", total_pages));
        }

        #[test]
        fn prop_positive_integers_parse(page in 1i64..i64::MAX, limit in 1i64..i64::MAX) {
            let params = PaginationParams::try_from(PaginationQuery {
                page: Some(page.to_string()),
                limit: Some(limit.to_string()),
            })
            .unwrap();
            prop_assert_eq!(params.page, page as u64);
            prop_assert_eq!(params.limit, limit as u64);
        }
    }
}
