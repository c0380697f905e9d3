//! Calendar-day arithmetic shared by the engine and the calendar view
//!
//! Everything here works on `NaiveDate`: local, midnight-anchored calendar
//! days with no time-of-day or timezone attached.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Week Start
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
  #[default]
  Monday,
  Sunday,
}

impl WeekStart {
  fn weekday(self) -> Weekday {
    match self {
      WeekStart::Monday => Weekday::Mon,
      WeekStart::Sunday => Weekday::Sun,
    }
  }
}

impl std::fmt::Display for WeekStart {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Monday => write!(f, "monday"),
      Self::Sunday => write!(f, "sunday"),
    }
  }
}

impl std::str::FromStr for WeekStart {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "monday" | "mon" => Ok(Self::Monday),
      "sunday" | "sun" => Ok(Self::Sunday),
      _ => Err(format!("Unknown week start: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Day Arithmetic
/// ---------------------------------------------------------------------------

/// Whole days from `from` to `to`; negative when `to` is earlier
pub fn whole_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
  to.signed_duration_since(from).num_days()
}

/// Add `days` to `date`, saturating at the ends of the representable calendar
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
  Duration::try_days(days)
    .and_then(|delta| date.checked_add_signed(delta))
    .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Add whole months, clamping to the last day of the target month (Jan 31 + 1 = Feb 28/29)
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
  date
    .checked_add_months(Months::new(months))
    .unwrap_or(NaiveDate::MAX)
}

/// ---------------------------------------------------------------------------
/// Month / Week Boundaries
/// ---------------------------------------------------------------------------

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
  date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
  // First of next month minus one day; December rolls the year.
  let (year, month) = if date.month() == 12 {
    (date.year() + 1, 1)
  } else {
    (date.year(), date.month() + 1)
  };
  NaiveDate::from_ymd_opt(year, month, 1)
    .and_then(|first| first.pred_opt())
    .unwrap_or(NaiveDate::MAX)
}

pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
  let offset = (date.weekday().num_days_from_monday() + 7
    - week_start.weekday().num_days_from_monday())
    % 7;
  add_days(date, -(offset as i64))
}

pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
  add_days(start_of_week(date, week_start), 6)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
