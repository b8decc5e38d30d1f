use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

/// Organisation model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::organisations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Organisation {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub slug: String,
    #[diesel(column_name = type_)]
    pub org_type: String,
    pub industry: String,
    pub state: String,
    pub country: String,
    pub address: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Partial organisation update; `None` fields are left untouched.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::organisations)]
pub struct UpdateOrganisation {
    pub name: Option<String>,
    pub email: Option<String>,
    pub slug: Option<String>,
    #[diesel(column_name = type_)]
    pub org_type: Option<String>,
    pub industry: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub updated_at: Timestamp,
}

impl UpdateOrganisation {
    /// Creates an empty changeset stamped with the current time.
    pub fn touch() -> Self {
        Self {
            name: None,
            email: None,
            slug: None,
            org_type: None,
            industry: None,
            state: None,
            country: None,
            address: None,
            updated_at: Timestamp::from(jiff::Timestamp::now()),
        }
    }
}
