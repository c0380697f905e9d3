use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CycleError {
  #[error("Invalid cycle profile: {0}")]
  InvalidCycleProfile(String),

  #[error("Invalid range: {end} is before {start}")]
  InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// ---------------------------------------------------------------------------
/// Cycle Profile
/// ---------------------------------------------------------------------------

/// The cycle parameters every engine query runs against.
///
/// Fields are public so profiles can arrive straight from the UI or the
/// store; `classify` and `project` re-check them on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleProfile {
  /// Assumed total cycle duration in days
  pub cycle_length: i64,
  /// Bleeding days at the start of each cycle
  pub period_length: i64,
  /// Start of a known period; day 0 of the cycle
  pub anchor_start: NaiveDate,
}

impl CycleProfile {
  pub fn new(
    cycle_length: i64,
    period_length: i64,
    anchor_start: NaiveDate,
  ) -> Result<Self, CycleError> {
    let profile = Self {
      cycle_length,
      period_length,
      anchor_start,
    };
    profile.validate()?;
    Ok(profile)
  }

  /// Enforce `cycle_length >= period_length >= 1`
  pub fn validate(&self) -> Result<(), CycleError> {
    Self::validate_lengths(self.cycle_length, self.period_length)
  }

  pub fn validate_lengths(cycle_length: i64, period_length: i64) -> Result<(), CycleError> {
    if cycle_length < 1 {
      return Err(CycleError::InvalidCycleProfile(format!(
        "cycle length must be at least 1 day, got {}",
        cycle_length
      )));
    }
    if period_length < 1 {
      return Err(CycleError::InvalidCycleProfile(format!(
        "period length must be at least 1 day, got {}",
        period_length
      )));
    }
    if period_length > cycle_length {
      return Err(CycleError::InvalidCycleProfile(format!(
        "period length {} exceeds cycle length {}",
        period_length, cycle_length
      )));
    }
    Ok(())
  }
}
