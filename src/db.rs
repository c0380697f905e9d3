use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::EngineConfig;

pub type DbPool = SqlitePool;

/// Application state holding the database pool and loaded config
pub struct AppState {
  pub db: DbPool,
  pub config: EngineConfig,
}

impl AppState {
  /// Connect to the configured database and run migrations
  pub async fn initialize(config: EngineConfig) -> Result<Self, sqlx::Error> {
    let db = initialize_db(&config.database_url).await?;
    Ok(Self { db, config })
  }
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db(db_url: &str) -> Result<DbPool, sqlx::Error> {
  tracing::info!(%db_url, "initializing database");

  // In-memory databases are per-connection; a second connection would see an empty schema
  let max_connections = if db_url.contains(":memory:") { 1 } else { 5 };

  let pool = SqlitePoolOptions::new()
    .max_connections(max_connections)
    .connect(db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("database initialized");

  Ok(pool)
}
