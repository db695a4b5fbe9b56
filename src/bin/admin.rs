//! CLI administration tool for shortlink.
//!
//! Manages links directly in the database, without going through the web pages.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Shorten a URL
//! cargo run --bin admin -- links add example.com
//!
//! # Point a link somewhere else
//! cargo run --bin admin -- links set abc123 https://example.org
//!
//! # Delete a link
//! cargo run --bin admin -- links delete abc123
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use shortlink::application::services::LinkService;
use shortlink::config::Config;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::PgLinkRepository;
use shortlink::server::connect_database;
use shortlink::utils::code_generator::is_valid_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Shorten a URL under a new random code
    Add {
        /// Long URL (`http://` is prepended when no scheme is given)
        url: String,
    },

    /// Change the long URL of an existing link
    Set {
        /// Short code
        code: String,

        /// New long URL
        url: String,
    },

    /// Delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_database(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Add { url } => add_link(&service, &url).await?,
        LinkAction::Set { code, url } => set_link(&service, &code, &url).await?,
        LinkAction::Delete { code, yes } => delete_link(&service, &code, yes).await?,
    }

    Ok(())
}

/// Lists all links in insertion order.
///
/// # Output Format
///
/// ```text
/// Short links
///
///   Code     Created            Long URL
///   ─────────────────────────────────────────────────────────
///   k3x9a1   2024-01-15 10:30   http://example.com
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "Short links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links add <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<18} {}",
            link.code.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shortens a URL and prints the new code.
async fn add_link(service: &LinkService, url: &str) -> Result<()> {
    let link = service
        .create_link(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "Short link created".green().bold());
    println!("  Code:     {}", link.code.bright_yellow().bold());
    println!("  Long URL: {}", link.long_url.cyan());
    println!("  Path:     {}", link.short_path());

    Ok(())
}

/// Changes the long URL of an existing link.
async fn set_link(service: &LinkService, code: &str, url: &str) -> Result<()> {
    ensure_valid_code(code)?;

    let updated = service
        .update_long_url(code, url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update link: {}", e))?;

    if updated {
        println!("{}", "Short link updated".green().bold());
    } else {
        println!("{}", format!("No link with code '{code}'").yellow());
    }

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &LinkService, code: &str, skip_confirm: bool) -> Result<()> {
    ensure_valid_code(code)?;

    let link = service
        .get_link(code)
        .await
        .map_err(|e| match e {
            AppError::NotFound { .. } => anyhow::anyhow!("No link with code '{}'", code),
            other => anyhow::anyhow!("Database error: {}", other),
        })?;

    println!("  Code:     {}", link.code.cyan());
    println!("  Long URL: {}", link.long_url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Short link deleted".green().bold());

    Ok(())
}

fn ensure_valid_code(code: &str) -> Result<()> {
    if !is_valid_code(code) {
        anyhow::bail!("'{}' is not a valid short code", code);
    }
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Links stored: {}", count.to_string().bright_white());
        }
    }

    Ok(())
}
