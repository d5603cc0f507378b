//! Database module
//!
//! Owns the SQLite connection pool and migrations. The pool is created once
//! at startup and handed to [`crate::state::AppState`]; nothing else in the
//! crate opens connections.

pub mod models;
pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Open the database, apply pragmas and run embedded migrations
pub async fn connect(db_path: &str) -> Result<SqlitePool, BoxError> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
        .map_err(|e| format!("Invalid database path: {e}"))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .pragma("foreign_keys", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| format!("Failed to open database: {e}"))?;

    // Wait out write contention instead of failing immediately
    sqlx::query("PRAGMA busy_timeout = 5000;")
        .execute(&pool)
        .await
        .map_err(|e| format!("Failed to set busy_timeout: {e}"))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| format!("Failed to apply migrations: {e}"))?;

    tracing::info!("Database ready (SQLite WAL, foreign_keys=ON)");
    Ok(pool)
}
