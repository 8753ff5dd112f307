//! CLI administration tool for link-shortener.
//!
//! Works against the same database as the server, without going through
//! HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- link shorten https://example.com/page
//!
//! # Validate a URL and preview a code without touching the database
//! cargo run --bin admin -- link shorten --dry-run https://example.com/page
//!
//! # Look up a short code
//! cargo run --bin admin -- link resolve aZ3x9Qm
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `link_shortener::config`.

use link_shortener::config::{Config, mask_connection_string};
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::server::{build_link_service, connect_pool, link_service_with};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
    /// Create and inspect links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL (or print its existing code)
    Shorten {
        /// URL to shorten; prompted for when omitted
        url: Option<String>,

        /// Skip the DNS check on the URL's host
        #[arg(long)]
        no_dns: bool,

        /// Run against an empty in-memory store; nothing is saved
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the URL behind a short code
    Resolve {
        /// The 7-character short code
        short_id: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, config).await?,
        Commands::Stats => {
            let pool = connect_pool(&config).await?;
            handle_stats(&config, pool).await?
        }
        Commands::Db { action } => {
            let pool = connect_pool(&config).await?;
            handle_db_action(action, &config, &pool).await?
        }
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, mut config: Config) -> Result<()> {
    match action {
        LinkAction::Shorten {
            url,
            no_dns,
            dry_run,
            yes,
        } => {
            println!("{}", "🔗 Shorten URL".bright_blue().bold());
            if dry_run {
                println!("{}", "   (dry run, nothing is saved)".bright_black());
            }
            println!();

            if no_dns {
                config.dns_check = false;
            }

            let service = if dry_run {
                link_service_with(&config, Arc::new(InMemoryLinkRepository::new()))
            } else {
                build_link_service(&config, connect_pool(&config).await?)
            };

            let url = match url {
                Some(u) => u,
                None => Input::new().with_prompt("URL").interact_text()?,
            };

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Shorten {}?", url))
                    .default(true)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let link = service
                .shorten(&url)
                .await
                .with_context(|| format!("Failed to shorten {}", url))?;

            println!("  URL:   {}", link.original_url.cyan());
            println!("  Code:  {}", link.short_id.bright_yellow().bold());
            println!(
                "  Since: {}",
                link.created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
        LinkAction::Resolve { short_id } => {
            let service = build_link_service(&config, connect_pool(&config).await?);

            let link = service
                .resolve(&short_id)
                .await
                .with_context(|| format!("Failed to resolve {}", short_id))?;

            println!("  {} → {}", link.short_id.bright_yellow(), link.original_url.cyan());
        }
    }

    println!();
    Ok(())
}

/// Displays link count through the same service the server uses.
async fn handle_stats(config: &Config, pool: PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = build_link_service(config, pool);
    let links_count = service.count().await?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config, pool: &PgPool) -> Result<()> {
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

            println!(
                "  URL:        {}",
                mask_connection_string(&config.database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations").run(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
