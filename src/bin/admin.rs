//! CLI administration tool for pawliday.
//!
//! Provides commands for managing sitter accounts, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a sitter account
//! cargo run --bin admin -- sitter create
//!
//! # List all sitters
//! cargo run --bin admin -- sitter list
//!
//! # Delete a sitter with everything under it
//! cargo run --bin admin -- sitter delete ada@example.com
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite URL, default `sqlite:data/pawliday.db`
//!
//! # Features
//!
//! - **Sitter Management**: Create, list, and delete sitter accounts
//! - **Statistics**: View sitter, owner and dog counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use pawliday::domain::entities::NewSitter;
use pawliday::domain::repositories::SitterRepository;
use pawliday::infrastructure::persistence::SqliteSitterRepository;
use pawliday::utils::password::hash_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing pawliday.
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
    /// Manage sitter accounts
    Sitter {
        #[command(subcommand)]
        action: SitterAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Sitter management subcommands.
#[derive(Subcommand)]
enum SitterAction {
    /// Create a new sitter account
    Create {
        /// Email address of the new account
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all sitter accounts
    List,

    /// Delete a sitter account by id or email, with all owners and dogs
    Delete {
        /// Sitter id or email address
        id_or_email: String,
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

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:data/pawliday.db".to_string());

    let pool = SqlitePool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Sitter { action } => handle_sitter_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches sitter management commands.
async fn handle_sitter_action(action: SitterAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteSitterRepository::new(Arc::new(pool.clone())));

    match action {
        SitterAction::Create { email, yes } => {
            create_sitter(repo, email, yes).await?;
        }
        SitterAction::List => {
            list_sitters(pool).await?;
        }
        SitterAction::Delete { id_or_email } => {
            delete_sitter(repo, id_or_email).await?;
        }
    }

    Ok(())
}

/// Creates a new sitter account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for name and email (or use provided email)
/// 2. Prompt for the password with confirmation
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash the password with argon2
/// 5. Store in database
///
/// # Security
///
/// Only the argon2 hash is stored, the raw password never leaves the
/// process.
async fn create_sitter(
    repo: Arc<SqliteSitterRepository>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create Sitter Account".bright_blue().bold());
    println!();

    let first_name: String = Input::new().with_prompt("First name").interact_text()?;
    let last_name: String = Input::new().with_prompt("Last name").interact_text()?;

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    if password.len() < 8 {
        println!("{}", "Password must be at least 8 characters".red());
        return Ok(());
    }

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Name:  {} {}", first_name.cyan(), last_name.cyan());
    println!("  Email: {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let password_hash =
        hash_password(&password).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    let sitter = repo
        .create(NewSitter {
            first_name,
            last_name,
            email,
            password_hash,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create sitter: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "Sitter created successfully!".green().bold(),
        sitter.id.to_string().bright_white()
    );
    println!();

    Ok(())
}

/// Row shape for the sitter listing query.
#[derive(sqlx::FromRow)]
struct SitterListRow {
    sitter_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    owner_count: i64,
}

/// Lists all sitter accounts with their owner counts.
///
/// # Output Format
///
/// ```text
/// Sitters
///
///   ID  Name                           Email                          Owners
///   ────────────────────────────────────────────────────────────────────────
///   1   Ada Lovelace                   ada@example.com                3
/// ```
async fn list_sitters(pool: &SqlitePool) -> Result<()> {
    println!("{}", "Sitters".bright_blue().bold());
    println!();

    let sitters: Vec<SitterListRow> = sqlx::query_as(
        r#"
        SELECT s.sitter_id, s.first_name, s.last_name, s.email,
               COUNT(o.owner_id) AS owner_count
        FROM sitters s
        LEFT JOIN owners o ON o.sitter_id = s.sitter_id
        GROUP BY s.sitter_id
        ORDER BY s.sitter_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    if sitters.is_empty() {
        println!("{}", "  No sitters found".yellow());
        println!();
        println!(
            "  Create one with: {} admin sitter create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<30} {:<6}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Owners".bright_white().bold()
    );
    println!("  {}", "─".repeat(72).bright_black());

    for sitter in &sitters {
        println!(
            "  {:<4} {:<30} {:<30} {:<6}",
            sitter.sitter_id.to_string().bright_black(),
            format!("{} {}", sitter.first_name, sitter.last_name).cyan(),
            sitter.email,
            sitter.owner_count.to_string().bright_black(),
        );
    }

    println!();
    println!(
        "  Total: {}",
        sitters.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a sitter account by id or email with confirmation prompt.
///
/// # Lookup
///
/// - If input is numeric, lookup by id
/// - Otherwise, lookup by email (exact match)
///
/// # Safety
///
/// - Requires confirmation (default: No)
/// - Deletes all owners and dogs under the account
async fn delete_sitter(repo: Arc<SqliteSitterRepository>, id_or_email: String) -> Result<()> {
    println!("{}", "Delete Sitter Account".bright_blue().bold());
    println!();

    let sitter = match id_or_email.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_email(&id_or_email)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let sitter = sitter.context("Sitter not found")?;

    println!(
        "  Sitter: {} {}",
        sitter.first_name.cyan(),
        sitter.last_name.cyan()
    );
    println!("  Email:  {}", sitter.email.cyan());
    println!("  ID:     {}", sitter.id.to_string().bright_black());
    println!();
    println!(
        "{}",
        "This removes the account with all of its owners and dogs."
            .red()
            .bold()
    );
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this account?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    repo.delete(sitter.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete sitter: {}", e))?;

    println!();
    println!("{}", "Sitter deleted successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Number of sitter accounts
/// - Number of owners
/// - Number of dogs
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let sitters_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sitters")
        .fetch_one(pool)
        .await?;

    let owners_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM owners")
        .fetch_one(pool)
        .await?;

    let dogs_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dogs")
        .fetch_one(pool)
        .await?;

    println!(
        "  Sitters: {}",
        sitters_count.to_string().bright_green().bold()
    );
    println!(
        "  Owners:  {}",
        owners_count.to_string().bright_green().bold()
    );
    println!("  Dogs:    {}", dogs_count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
