use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::whole_days_between;

/// ---------------------------------------------------------------------------
/// Phase
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
  Period,
  Follicular,
  /// Only produced as a calendar highlight, see `DayClassification::highlight`
  Fertile,
  Ovulation,
  Luteal,
}

impl std::fmt::Display for Phase {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Period => write!(f, "period"),
      Self::Follicular => write!(f, "follicular"),
      Self::Fertile => write!(f, "fertile"),
      Self::Ovulation => write!(f, "ovulation"),
      Self::Luteal => write!(f, "luteal"),
    }
  }
}

impl std::str::FromStr for Phase {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "period" => Ok(Self::Period),
      "follicular" => Ok(Self::Follicular),
      "fertile" => Ok(Self::Fertile),
      "ovulation" => Ok(Self::Ovulation),
      "luteal" => Ok(Self::Luteal),
      _ => Err(format!("Unknown phase: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Day Classification
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
  pub date: NaiveDate,
  /// Always in `[0, cycle_length)`
  pub day_in_cycle: i64,
  pub phase: Phase,
  pub is_period: bool,
  pub is_fertile: bool,
  pub is_ovulation: bool,
}

impl DayClassification {
  /// The single badge a calendar cell shows for this day.
  ///
  /// Period wins, then ovulation, then a fertile-only day, then the phase.
  pub fn highlight(&self) -> Phase {
    if self.is_period {
      Phase::Period
    } else if self.is_ovulation {
      Phase::Ovulation
    } else if self.is_fertile {
      Phase::Fertile
    } else {
      self.phase
    }
  }
}

/// ---------------------------------------------------------------------------
/// Predicted Interval
/// ---------------------------------------------------------------------------

/// A projected period, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PredictedInterval {
  pub start: NaiveDate,
  pub end: NaiveDate,
}

impl PredictedInterval {
  pub fn length_days(&self) -> i64 {
    whole_days_between(self.start, self.end) + 1
  }

  pub fn contains(&self, date: NaiveDate) -> bool {
    self.start <= date && date <= self.end
  }
}
