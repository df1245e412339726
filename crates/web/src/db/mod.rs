//! Database operations for the Daylist `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `item` - Standalone items forming the default (today) list
//! - `list` - Named lists; embedded items live in a `jsonb` array column so
//!   a list stays a single document and element operations are atomic
//!
//! # Migrations
//!
//! Migrations are stored in `crates/web/migrations/` and run at startup.
//!
//! Queries use the runtime sqlx API (not the compile-time macros), so the
//! crate builds without a live database.

pub mod items;
pub mod lists;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use items::ItemRepository;
pub use lists::ListRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
