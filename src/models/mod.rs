mod organisation;
mod user;

pub use organisation::{Organisation, UpdateOrganisation};
pub use user::{PaginatedUsers, UpdateUser, User, UserRole};
