//! contactbook-server: contact book HTTP API
//!
//! A single `contacts` table in SQLite behind three JSON routes:
//! create, paginated list, and delete.

pub mod db;
pub mod http;
pub mod models;

pub use db::{Contact, ContactRepo, DbError};
pub use http::{build_router, run_server, ServerConfig, ServerError};
