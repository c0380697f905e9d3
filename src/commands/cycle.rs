//! Commands for cycle settings and the period log

use chrono::NaiveDate;

use super::CommandError;
use crate::db::AppState;
use crate::models::{CycleProfile, CycleSettings, PeriodLogEntry};
use crate::store;

const DEFAULT_LOG_LIMIT: i64 = 24;

/// The profile the calendar is currently drawn with
pub async fn get_cycle_profile(state: &AppState) -> Result<CycleProfile, CommandError> {
  Ok(store::current_profile(&state.db, &state.config).await?)
}

/// Save cycle and period lengths, optionally with a new anchor date
pub async fn update_cycle_settings(
  state: &AppState,
  cycle_length: i64,
  period_length: i64,
  anchor_start: Option<NaiveDate>,
) -> Result<CycleSettings, CommandError> {
  Ok(store::save_settings(&state.db, cycle_length, period_length, anchor_start).await?)
}

/// Log that a period started on `start_date`
pub async fn log_period(
  state: &AppState,
  start_date: NaiveDate,
  notes: Option<String>,
) -> Result<PeriodLogEntry, CommandError> {
  let notes = notes.as_deref().map(str::trim).filter(|n| !n.is_empty());
  Ok(store::log_period_start(&state.db, start_date, notes).await?)
}

pub async fn get_period_log(
  state: &AppState,
  limit: Option<i64>,
) -> Result<Vec<PeriodLogEntry>, CommandError> {
  let limit = limit.unwrap_or(DEFAULT_LOG_LIMIT).max(1);
  Ok(store::list_period_starts(&state.db, limit).await?)
}

pub async fn remove_period(state: &AppState, start_date: NaiveDate) -> Result<bool, CommandError> {
  Ok(store::delete_period_start(&state.db, start_date).await?)
}
