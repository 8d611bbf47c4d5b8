//! HTTP server command for the contact book API

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use contactbook_server::db;
use contactbook_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CONTACTBOOK_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Allowed CORS origin (repeatable; any origin when omitted)
    #[arg(
        long = "allow-origin",
        value_name = "ORIGIN",
        env = "CONTACTBOOK_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allow_origin: Vec<String>,

    /// Directory with a built frontend to serve alongside the API
    #[arg(long, env = "CONTACTBOOK_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    if let Some(dir) = &args.static_dir {
        anyhow::ensure!(dir.is_dir(), "static dir {} is not a directory", dir.display());
    }

    tracing::info!("Starting contactbook server on {}", args.bind);

    // Open the store; the server owns it from here and closes it on shutdown
    let pool = db::open(&args.database.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database.database_url))?;

    let config = ServerConfig {
        bind_addr: args.bind,
        allowed_origins: args.allow_origin,
        static_dir: args.static_dir,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
