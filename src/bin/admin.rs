//! CLI administration tool for slug-shortener.
//!
//! Provides commands for inspecting mappings and performing database
//! operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Show the mapping behind a slug
//! cargo run --bin admin -- lookup abc123
//!
//! # List the mappings created by one owner
//! cargo run --bin admin -- list 3f0c2a4e-8d7b-4c36-9a55-0e1f6b2d9c11
//!
//! # Allocate a free slug without creating a mapping
//! cargo run --bin admin -- slug --length 8
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use slug_shortener::application::services::{ListingService, SlugAllocator};
use slug_shortener::domain::owner::OwnerId;
use slug_shortener::domain::repositories::ShortUrlRepository;
use slug_shortener::infrastructure::persistence::PgShortUrlRepository;
use slug_shortener::state::DEFAULT_SLUG_LENGTH;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing slug-shortener.
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
    /// Show statistics
    Stats,

    /// Show the URL a slug points to
    Lookup {
        /// Slug to resolve
        slug: String,
    },

    /// List the mappings created by an owner
    List {
        /// Owner id (UUID) from the session cookie
        owner: String,
    },

    /// Allocate a free slug without creating a mapping
    Slug {
        /// Slug length (1-50)
        #[arg(short, long, default_value_t = DEFAULT_SLUG_LENGTH)]
        length: usize,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repo = Arc::new(PgShortUrlRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Stats => handle_stats(repo).await?,
        Commands::Lookup { slug } => lookup(repo, &slug).await?,
        Commands::List { owner } => list_owner(repo, &owner).await?,
        Commands::Slug { length } => allocate_slug(repo, length).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays the number of stored mappings.
async fn handle_stats(repo: Arc<PgShortUrlRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count short URLs: {}", e))?;

    println!(
        "  Short URLs: {}",
        count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints one mapping, reading the store directly (the cache is bypassed).
async fn lookup(repo: Arc<PgShortUrlRepository>, slug: &str) -> Result<()> {
    let short_url = repo
        .find_by_slug(slug)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let Some(short_url) = short_url else {
        println!("{} {}", "❌ No mapping for".red(), slug.yellow());
        return Ok(());
    };

    println!("  Slug:    {}", short_url.slug.cyan());
    println!("  URL:     {}", short_url.url.bright_white());
    println!("  Owner:   {}", short_url.owner_id.to_string().bright_black());
    println!(
        "  Created: {}",
        short_url
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );

    Ok(())
}

/// Lists an owner's mappings, oldest first.
///
/// # Output Format
///
/// ```text
/// 📋 Short URLs
///
///   Slug         URL                                      Created
///   ──────────────────────────────────────────────────────────────────────
///   abc123       https://example.com                      2024-01-15 10:30
/// ```
async fn list_owner(repo: Arc<PgShortUrlRepository>, owner: &str) -> Result<()> {
    let owner: OwnerId = owner
        .parse()
        .with_context(|| format!("Invalid owner id: {owner}"))?;

    println!("{}", "📋 Short URLs".bright_blue().bold());
    println!();

    let short_urls = ListingService::new(repo)
        .list_by_owner(Some(&owner))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if short_urls.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<40} {:<16}",
        "Slug".bright_white().bold(),
        "URL".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for short_url in &short_urls {
        println!(
            "  {:<12} {:<40} {}",
            short_url.slug.cyan(),
            short_url.url,
            short_url
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        short_urls.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Allocates a slug that is free right now.
async fn allocate_slug(repo: Arc<PgShortUrlRepository>, length: usize) -> Result<()> {
    let slug = SlugAllocator::new(repo)
        .generate_unique_slug(length)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to allocate slug: {}", e))?;

    println!("{}", slug.bright_green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
