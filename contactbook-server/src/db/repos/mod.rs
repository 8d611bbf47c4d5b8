//! Repository implementations for database access
//!
//! Repositories borrow the pool and only accept validated model types.

pub mod contacts;

pub use contacts::{Contact, ContactRepo, DbError};
