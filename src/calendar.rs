//! Calendar view data
//!
//! Builds the month grid and the upcoming-predictions list on top of the
//! engine. Each cell is classified independently; nothing here reads the
//! clock, so "today" always comes from the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::dates::{
  add_days, add_months, end_of_month, end_of_week, start_of_week, whole_days_between, WeekStart,
};
use crate::models::{CycleError, CycleProfile, DayClassification, Phase, PredictedInterval};
use crate::projector::project;

/// Months of predictions shown past "today"
pub const PREDICTION_HORIZON_MONTHS: u32 = 3;

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CalendarError {
  #[error("Invalid month: {year}-{month}")]
  InvalidMonth { year: i32, month: u32 },

  #[error(transparent)]
  Cycle(#[from] CycleError),
}

/// ---------------------------------------------------------------------------
/// Month Grid
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarCell {
  pub date: NaiveDate,
  /// False for the leading/trailing days borrowed from adjacent months
  pub in_month: bool,
  pub highlight: Phase,
  pub classification: DayClassification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarMonth {
  pub year: i32,
  pub month: u32,
  pub week_start: WeekStart,
  /// Always whole weeks of seven cells
  pub weeks: Vec<Vec<CalendarCell>>,
}

impl CalendarMonth {
  pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
    self.weeks.iter().flatten()
  }
}

/// Build the grid for one month, padded out to full weeks
pub fn month_grid(
  year: i32,
  month: u32,
  profile: &CycleProfile,
  week_start: WeekStart,
) -> Result<CalendarMonth, CalendarError> {
  let first = NaiveDate::from_ymd_opt(year, month, 1)
    .ok_or(CalendarError::InvalidMonth { year, month })?;
  profile.validate()?;

  let last = end_of_month(first);
  let grid_start = start_of_week(first, week_start);
  let grid_end = end_of_week(last, week_start);

  let mut weeks = Vec::new();
  let mut week = Vec::with_capacity(7);
  for offset in 0..=whole_days_between(grid_start, grid_end) {
    let date = add_days(grid_start, offset);
    let classification = classify(date, profile)?;
    week.push(CalendarCell {
      date,
      in_month: first <= date && date <= last,
      highlight: classification.highlight(),
      classification,
    });
    if week.len() == 7 {
      weeks.push(std::mem::replace(&mut week, Vec::with_capacity(7)));
    }
  }

  tracing::debug!(year, month, weeks = weeks.len(), "built calendar month");

  Ok(CalendarMonth {
    year,
    month,
    week_start,
    weeks,
  })
}

/// ---------------------------------------------------------------------------
/// Upcoming Predictions
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum PredictionLabel {
  NextPeriod,
  Today,
  InDays(i64),
  /// Browsing a month before today
  DaysAgo(i64),
}

impl PredictionLabel {
  fn relative_to(today: NaiveDate, start: NaiveDate) -> Self {
    let days = whole_days_between(today, start);
    match days {
      0 => Self::Today,
      n if n > 0 => Self::InDays(n),
      n => Self::DaysAgo(-n),
    }
  }
}

impl std::fmt::Display for PredictionLabel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::NextPeriod => write!(f, "Current/next period"),
      Self::Today => write!(f, "Today"),
      Self::InDays(1) => write!(f, "In 1 day"),
      Self::InDays(n) => write!(f, "In {} days", n),
      Self::DaysAgo(1) => write!(f, "1 day ago"),
      Self::DaysAgo(n) => write!(f, "{} days ago", n),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledPrediction {
  pub interval: PredictedInterval,
  pub label: PredictionLabel,
  pub caption: String,
}

/// Predictions from the displayed month through three months past `today`
pub fn upcoming_predictions(
  profile: &CycleProfile,
  month_start: NaiveDate,
  today: NaiveDate,
) -> Result<Vec<LabeledPrediction>, CycleError> {
  let horizon_end = add_months(today, PREDICTION_HORIZON_MONTHS).max(month_start);
  let intervals = project(profile, month_start, horizon_end)?;

  Ok(
    intervals
      .into_iter()
      .enumerate()
      .map(|(i, interval)| {
        let label = if i == 0 {
          PredictionLabel::NextPeriod
        } else {
          PredictionLabel::relative_to(today, interval.start)
        };
        LabeledPrediction {
          interval,
          label,
          caption: label.to_string(),
        }
      })
      .collect(),
  )
}

/// Days until the next period starts; 0 while a period is in progress
pub fn days_until_next_period(profile: &CycleProfile, today: NaiveDate) -> Result<i64, CycleError> {
  let day = classify(today, profile)?;
  if day.is_period {
    Ok(0)
  } else {
    Ok(profile.cycle_length - day.day_in_cycle)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
