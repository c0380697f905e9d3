//! SQLite persistence for cycle settings and the period log
//!
//! The engine never reads from here; this layer turns stored rows into the
//! `CycleProfile` the engine is called with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::config::EngineConfig;
use crate::models::{CycleError, CycleProfile, CycleSettings, PeriodLogEntry};

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(String),

  #[error("No anchor date: log a period start or set one in cycle settings")]
  NotConfigured,

  #[error(transparent)]
  Cycle(#[from] CycleError),
}

impl From<sqlx::Error> for StoreError {
  fn from(e: sqlx::Error) -> Self {
    StoreError::Database(e.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Cycle Settings
/// ---------------------------------------------------------------------------

pub async fn load_settings(pool: &SqlitePool) -> Result<Option<CycleSettings>, StoreError> {
  let settings = sqlx::query_as::<_, CycleSettings>(
    "SELECT cycle_length, period_length, anchor_start, updated_at FROM cycle_settings WHERE id = 1",
  )
  .fetch_optional(pool)
  .await?;

  Ok(settings)
}

/// Insert or replace the settings row; lengths are validated before writing
pub async fn save_settings(
  pool: &SqlitePool,
  cycle_length: i64,
  period_length: i64,
  anchor_start: Option<NaiveDate>,
) -> Result<CycleSettings, StoreError> {
  CycleProfile::validate_lengths(cycle_length, period_length)?;

  sqlx::query(
    r#"
    INSERT INTO cycle_settings (id, cycle_length, period_length, anchor_start, updated_at)
    VALUES (1, ?1, ?2, ?3, CURRENT_TIMESTAMP)
    ON CONFLICT(id) DO UPDATE SET
      cycle_length = excluded.cycle_length,
      period_length = excluded.period_length,
      anchor_start = COALESCE(excluded.anchor_start, anchor_start),
      updated_at = CURRENT_TIMESTAMP
    "#,
  )
  .bind(cycle_length)
  .bind(period_length)
  .bind(anchor_start)
  .execute(pool)
  .await?;

  tracing::info!(cycle_length, period_length, ?anchor_start, "saved cycle settings");

  load_settings(pool)
    .await?
    .ok_or_else(|| StoreError::Database("settings row missing after save".to_string()))
}

/// ---------------------------------------------------------------------------
/// Period Log
/// ---------------------------------------------------------------------------

/// Record a period start. Logging the same date twice keeps one row and
/// replaces its notes when new ones are given.
pub async fn log_period_start(
  pool: &SqlitePool,
  start_date: NaiveDate,
  notes: Option<&str>,
) -> Result<PeriodLogEntry, StoreError> {
  sqlx::query(
    r#"
    INSERT INTO period_log (start_date, notes)
    VALUES (?1, ?2)
    ON CONFLICT(start_date) DO UPDATE SET
      notes = COALESCE(excluded.notes, notes)
    "#,
  )
  .bind(start_date)
  .bind(notes)
  .execute(pool)
  .await?;

  tracing::info!(%start_date, "logged period start");

  let entry = sqlx::query_as::<_, PeriodLogEntry>(
    "SELECT id, start_date, notes, created_at FROM period_log WHERE start_date = ?1",
  )
  .bind(start_date)
  .fetch_one(pool)
  .await?;

  Ok(entry)
}

/// Most recent starts first
pub async fn list_period_starts(
  pool: &SqlitePool,
  limit: i64,
) -> Result<Vec<PeriodLogEntry>, StoreError> {
  let entries = sqlx::query_as::<_, PeriodLogEntry>(
    "SELECT id, start_date, notes, created_at FROM period_log ORDER BY start_date DESC LIMIT ?1",
  )
  .bind(limit)
  .fetch_all(pool)
  .await?;

  Ok(entries)
}

/// Returns whether a row was removed
pub async fn delete_period_start(pool: &SqlitePool, start_date: NaiveDate) -> Result<bool, StoreError> {
  let result = sqlx::query("DELETE FROM period_log WHERE start_date = ?1")
    .bind(start_date)
    .execute(pool)
    .await?;

  let removed = result.rows_affected() > 0;
  if removed {
    tracing::info!(%start_date, "deleted period start");
  }
  Ok(removed)
}

pub async fn latest_period_start(pool: &SqlitePool) -> Result<Option<NaiveDate>, StoreError> {
  let latest: Option<NaiveDate> =
    sqlx::query_scalar("SELECT start_date FROM period_log ORDER BY start_date DESC LIMIT 1")
      .fetch_optional(pool)
      .await?;

  Ok(latest)
}

/// ---------------------------------------------------------------------------
/// Profile Assembly
/// ---------------------------------------------------------------------------

/// The profile the calendar should use right now.
///
/// Lengths come from saved settings (config defaults otherwise). The anchor is
/// the most recent logged start, falling back to the anchor saved in settings.
pub async fn current_profile(
  pool: &SqlitePool,
  config: &EngineConfig,
) -> Result<CycleProfile, StoreError> {
  let settings = load_settings(pool).await?;
  let latest_logged = latest_period_start(pool).await?;

  let anchor = latest_logged
    .or_else(|| settings.as_ref().and_then(|s| s.anchor_start))
    .ok_or(StoreError::NotConfigured)?;

  let profile = match settings {
    Some(settings) => settings.to_profile(anchor)?,
    None => CycleProfile::new(config.default_cycle_length, config.default_period_length, anchor)?,
  };

  tracing::debug!(
    cycle_length = profile.cycle_length,
    period_length = profile.period_length,
    anchor_start = %profile.anchor_start,
    "assembled cycle profile"
  );

  Ok(profile)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
