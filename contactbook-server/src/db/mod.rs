//! Database layer - connection pool, schema, and repositories
//!
//! - One bounded SqlitePool per process, no global connection
//! - Schema bootstrapped with CREATE TABLE IF NOT EXISTS
//! - Every repository call is a single statement or one transaction

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, open, open_in_memory};
pub use sqlx::SqlitePool;
pub use repos::*;
