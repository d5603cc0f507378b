//! Application state

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, constructed once at startup and injected into
/// every handler. No hidden module-level singletons.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT signing secret
    pub jwt_secret: String,
}

impl AppState {
    /// Create a new AppState: open the pool and run migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_path).await?;
        Ok(Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
        })
    }

    /// Close the pool. Called on shutdown.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}
