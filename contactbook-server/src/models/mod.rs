//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod contact;
pub mod pagination;

pub use validation::ValidationError;
pub use contact::{ContactName, EmailAddress, NewContact, PhoneNumber};
pub use pagination::{Pagination, Paginated, PaginationParams, DEFAULT_LIMIT, MAX_LIMIT};
