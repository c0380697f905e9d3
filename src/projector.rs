//! Period projector
//!
//! Walks forward from the anchor in steps of `cycle_length` and emits every
//! period whose start lands in `[horizon_start, horizon_end)`.

use chrono::NaiveDate;

use crate::dates::{add_days, whole_days_between};
use crate::models::{CycleError, CycleProfile, PredictedInterval};

/// Project period intervals for a horizon, ordered by ascending start
pub fn project(
  profile: &CycleProfile,
  horizon_start: NaiveDate,
  horizon_end: NaiveDate,
) -> Result<Vec<PredictedInterval>, CycleError> {
  profile.validate()?;
  if horizon_end < horizon_start {
    tracing::warn!(%horizon_start, %horizon_end, "rejected projection range");
    return Err(CycleError::InvalidRange {
      start: horizon_start,
      end: horizon_end,
    });
  }

  let mut cursor = first_boundary_on_or_after(profile, horizon_start);
  let mut intervals = Vec::new();

  while cursor < horizon_end {
    intervals.push(PredictedInterval {
      start: cursor,
      end: add_days(cursor, profile.period_length - 1),
    });
    // Saturates at NaiveDate::MAX, which is never < horizon_end
    cursor = add_days(cursor, profile.cycle_length);
  }

  tracing::debug!(
    %horizon_start,
    %horizon_end,
    count = intervals.len(),
    "projected periods"
  );

  Ok(intervals)
}

/// Skip the cycles that start before `horizon_start` without stepping through them.
///
/// Never moves before the anchor: projections only run forward from it.
fn first_boundary_on_or_after(profile: &CycleProfile, horizon_start: NaiveDate) -> NaiveDate {
  let gap = whole_days_between(profile.anchor_start, horizon_start);
  if gap <= 0 {
    return profile.anchor_start;
  }
  // ceil(gap / cycle_length) whole cycles; gap > 0 so this cannot overflow
  let cycles = (gap - 1) / profile.cycle_length + 1;
  add_days(profile.anchor_start, cycles * profile.cycle_length)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
