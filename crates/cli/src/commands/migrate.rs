//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! consumers-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `CONSUMERS_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)
//!
//! # Migration Files
//!
//! Migrations are embedded from `crates/api/migrations/` at compile time,
//! so the binary can migrate any environment it can reach:
//!
//! ```text
//! migrations/
//! └── 20250430000001_create_consumer_schema.sql
//! ```

use secrecy::SecretString;
use thiserror::Error;
use tracing::info;

use consumers_api::db;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Required environment variable is missing
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration failed to apply
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply all pending database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection
/// fails, or a migration cannot be applied.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CONSUMERS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MigrationError::MissingEnvVar("CONSUMERS_DATABASE_URL"))?;

    info!("Connecting to consumers database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Running migrations...");
    db::MIGRATOR.run(&pool).await?;

    info!("Migrations complete!");
    Ok(())
}
