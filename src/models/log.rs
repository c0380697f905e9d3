use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::profile::{CycleError, CycleProfile};

/// Stored cycle settings (single row, id = 1)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CycleSettings {
  pub cycle_length: i64,
  pub period_length: i64,
  pub anchor_start: Option<NaiveDate>,
  pub updated_at: Option<DateTime<Utc>>,
}

impl CycleSettings {
  /// Build a profile from these settings, anchored at `anchor_start`
  pub fn to_profile(&self, anchor_start: NaiveDate) -> Result<CycleProfile, CycleError> {
    CycleProfile::new(self.cycle_length, self.period_length, anchor_start)
  }
}

/// A logged period start
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PeriodLogEntry {
  pub id: i64,
  pub start_date: NaiveDate,
  pub notes: Option<String>,
  pub created_at: Option<DateTime<Utc>>,
}
