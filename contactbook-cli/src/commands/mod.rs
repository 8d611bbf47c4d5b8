//! Command implementations

pub mod contacts;
pub mod serve;

use clap::Args;

pub use contacts::{run_contacts, ContactsArgs};
pub use serve::{run_serve, ServeArgs};

/// Default SQLite database, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://contacts.db";

/// Database selection shared by every command that opens the store
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// SQLite database URL (created if missing)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}
