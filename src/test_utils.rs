//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Seed helpers for settings and the period log
//! - Fixture dates and profiles

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::config::EngineConfig;
use crate::db::AppState;
use crate::models::CycleProfile;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// App state over a fresh in-memory database with default config
pub async fn setup_test_state() -> AppState {
  AppState {
    db: setup_test_db().await,
    config: EngineConfig {
      database_url: "sqlite::memory:".to_string(),
      ..EngineConfig::default()
    },
  }
}

/// Insert period starts directly, bypassing the store
pub async fn seed_test_period_log(pool: &SqlitePool, starts: &[NaiveDate]) {
  for start in starts {
    sqlx::query("INSERT INTO period_log (start_date) VALUES (?1)")
      .bind(start)
      .execute(pool)
      .await
      .expect("Failed to seed period log");
  }
}

/// Seed the settings row used by the fixture profile
pub async fn seed_test_settings(pool: &SqlitePool) {
  sqlx::query(
    r#"
    INSERT INTO cycle_settings (id, cycle_length, period_length, anchor_start)
    VALUES (1, 28, 5, ?1)
    "#,
  )
  .bind(date(2024, 12, 1))
  .execute(pool)
  .await
  .expect("Failed to seed cycle settings");
}

/// ---------------------------------------------------------------------------
/// Fixtures
/// ---------------------------------------------------------------------------

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// 28-day cycle, 5-day period, anchored on 2024-12-01
pub fn sample_profile() -> CycleProfile {
  CycleProfile {
    cycle_length: 28,
    period_length: 5,
    anchor_start: date(2024, 12, 1),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('cycle_settings', 'period_log')",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 2, "Expected 2 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_period_log_inserts_rows() {
    let pool = setup_test_db().await;
    seed_test_period_log(&pool, &[date(2024, 11, 3), date(2024, 12, 1)]).await;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM period_log")
      .fetch_one(&pool)
      .await
      .expect("Failed to count period log");
    assert_eq!(count, 2);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_sample_profile_is_valid() {
    assert!(sample_profile().validate().is_ok());
  }
}
