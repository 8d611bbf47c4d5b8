//! Local contact administration
//!
//! Talks to the SQLite store directly, with the same validation as the API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use contactbook_server::db::{self, ContactRepo, SqlitePool};
use contactbook_server::http::routes::contacts::{ContactListResponse, ContactResponse};
use contactbook_server::models::{NewContact, Pagination, DEFAULT_LIMIT, MAX_LIMIT};

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct ContactsArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(subcommand)]
    pub command: ContactsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ContactsCommands {
    /// Add a contact (same rules as POST /contacts)
    Add(AddArgs),
    /// List one page of contacts
    List(ListArgs),
    /// Delete a contact by id
    Delete(DeleteArgs),
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Contact name (non-empty)
    #[arg(long)]
    pub name: String,

    /// Email address (local@domain.tld)
    #[arg(long)]
    pub email: String,

    /// Phone number (exactly 10 digits)
    #[arg(long)]
    pub phone: String,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Page number (1-indexed)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Contacts per page (1-100)
    #[arg(
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_LIMIT))
    )]
    pub limit: u32,

    /// Print the API response shape as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Contact id
    pub id: i64,
}

pub async fn run_contacts(args: ContactsArgs) -> Result<()> {
    let pool = db::open(&args.database.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database.database_url))?;

    let result = match args.command {
        ContactsCommands::Add(add) => run_add(&pool, add).await,
        ContactsCommands::List(list) => run_list(&pool, list).await,
        ContactsCommands::Delete(del) => run_delete(&pool, del).await,
    };

    pool.close().await;
    result
}

async fn run_add(pool: &SqlitePool, args: AddArgs) -> Result<()> {
    let contact = NewContact::new(&args.name, &args.email, &args.phone)
        .context("Invalid contact")?;
    let created = ContactRepo::new(pool).create(contact).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&ContactResponse::from(created))?
    );
    Ok(())
}

async fn run_list(pool: &SqlitePool, args: ListArgs) -> Result<()> {
    let page = ContactRepo::new(pool)
        .list(Pagination::new(args.page, args.limit))
        .await?;

    if args.json {
        let response = ContactListResponse {
            total: page.total,
            contacts: page.items.into_iter().map(ContactResponse::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if page.items.is_empty() {
        println!("No contacts on this page.");
    }
    for contact in &page.items {
        println!(
            "#{:<5} {:<24} {:<32} {}",
            contact.id, contact.name, contact.email, contact.phone
        );
    }
    println!(
        "page {}/{} (total {})",
        page.page,
        page.total_pages(),
        page.total
    );
    if page.has_prev() {
        println!("  previous: --page {}", page.page - 1);
    }
    if page.has_next() {
        println!("  next: --page {}", page.page + 1);
    }
    Ok(())
}

async fn run_delete(pool: &SqlitePool, args: DeleteArgs) -> Result<()> {
    ContactRepo::new(pool)
        .delete(args.id)
        .await
        .with_context(|| format!("Failed to delete contact {}", args.id))?;

    println!("Deleted contact {}", args.id);
    Ok(())
}
