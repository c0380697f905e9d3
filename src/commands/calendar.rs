//! Commands backing the calendar view

use chrono::NaiveDate;

use super::CommandError;
use crate::calendar::{self, CalendarMonth, LabeledPrediction};
use crate::classifier;
use crate::dates::start_of_month;
use crate::db::AppState;
use crate::models::DayClassification;
use crate::store;

pub async fn classify_day(state: &AppState, date: NaiveDate) -> Result<DayClassification, CommandError> {
  let profile = store::current_profile(&state.db, &state.config).await?;
  Ok(classifier::classify(date, &profile)?)
}

/// Month grid using the configured week start
pub async fn get_calendar_month(
  state: &AppState,
  year: i32,
  month: u32,
) -> Result<CalendarMonth, CommandError> {
  let profile = store::current_profile(&state.db, &state.config).await?;
  Ok(calendar::month_grid(year, month, &profile, state.config.week_start)?)
}

/// Predictions starting at the month containing `displayed`
pub async fn get_upcoming_predictions(
  state: &AppState,
  displayed: NaiveDate,
  today: NaiveDate,
) -> Result<Vec<LabeledPrediction>, CommandError> {
  let profile = store::current_profile(&state.db, &state.config).await?;
  Ok(calendar::upcoming_predictions(&profile, start_of_month(displayed), today)?)
}

pub async fn get_days_until_next_period(state: &AppState, today: NaiveDate) -> Result<i64, CommandError> {
  let profile = store::current_profile(&state.db, &state.config).await?;
  Ok(calendar::days_until_next_period(&profile, today)?)
}
