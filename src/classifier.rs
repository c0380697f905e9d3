//! Day classifier
//!
//! Maps a calendar date to its position in the cycle and derives the phase
//! plus the period / fertile / ovulation flags. Pure: the only temporal
//! reference is the caller-supplied date and the profile's anchor.

use chrono::NaiveDate;

use crate::dates::{add_days, whole_days_between};
use crate::models::{CycleError, CycleProfile, DayClassification, Phase};

/// ---------------------------------------------------------------------------
/// Phase Thresholds (fixed day offsets, not scaled by cycle length)
/// ---------------------------------------------------------------------------

/// First day of the fertile window, and the end of the follicular phase
pub const FERTILE_START: i64 = 10;
pub const FERTILE_END: i64 = 16;
pub const OVULATION_START: i64 = 13;
pub const OVULATION_END: i64 = 15;

/// Zero-based offset of `date` within its cycle, normalized to `[0, cycle_length)`.
///
/// Caller must have validated `cycle_length >= 1`.
pub fn day_in_cycle(date: NaiveDate, anchor_start: NaiveDate, cycle_length: i64) -> i64 {
  whole_days_between(anchor_start, date).rem_euclid(cycle_length)
}

/// Classify a single date against a cycle profile
pub fn classify(date: NaiveDate, profile: &CycleProfile) -> Result<DayClassification, CycleError> {
  if let Err(e) = profile.validate() {
    tracing::warn!(error = %e, "rejected cycle profile");
    return Err(e);
  }

  let day = day_in_cycle(date, profile.anchor_start, profile.cycle_length);

  let is_period = day < profile.period_length;
  // Fertile/ovulation never overlap a period day (only reachable when period_length > 10)
  let is_fertile = !is_period && (FERTILE_START..=FERTILE_END).contains(&day);
  let is_ovulation = !is_period && (OVULATION_START..=OVULATION_END).contains(&day);

  let phase = if is_period {
    Phase::Period
  } else if is_ovulation {
    Phase::Ovulation
  } else if (profile.period_length..FERTILE_START).contains(&day) {
    Phase::Follicular
  } else {
    Phase::Luteal
  };

  Ok(DayClassification {
    date,
    day_in_cycle: day,
    phase,
    is_period,
    is_fertile,
    is_ovulation,
  })
}

/// Classify every day in the inclusive range `[start, end]`
pub fn classify_range(
  start: NaiveDate,
  end: NaiveDate,
  profile: &CycleProfile,
) -> Result<Vec<DayClassification>, CycleError> {
  if end < start {
    return Err(CycleError::InvalidRange { start, end });
  }
  profile.validate()?;

  let days = whole_days_between(start, end);
  (0..=days)
    .map(|offset| classify(add_days(start, offset), profile))
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{date, sample_profile};
  use proptest::prelude::*;

  #[test]
  fn test_known_fixture_ovulation_day() {
    let result = classify(date(2024, 12, 14), &sample_profile()).unwrap();
    assert_eq!(result.day_in_cycle, 13);
    assert_eq!(result.phase, Phase::Ovulation);
    assert!(result.is_fertile);
    assert!(result.is_ovulation);
    assert!(!result.is_period);
  }

  #[test]
  fn test_date_before_anchor_normalizes() {
    // 2 days before the anchor wraps to the end of the previous cycle
    let result = classify(date(2024, 11, 29), &sample_profile()).unwrap();
    assert_eq!(result.day_in_cycle, 26);
    assert_eq!(result.phase, Phase::Luteal);
  }

  #[test]
  fn test_phase_boundaries_for_28_day_cycle() {
    let profile = sample_profile();
    let phase_on = |day: i64| classify(add_days(profile.anchor_start, day), &profile).unwrap();

    assert_eq!(phase_on(0).phase, Phase::Period);
    assert_eq!(phase_on(4).phase, Phase::Period);
    assert_eq!(phase_on(5).phase, Phase::Follicular);
    assert_eq!(phase_on(9).phase, Phase::Follicular);

    // Fertile but not ovulating: phase stays luteal, flag carries the window
    let day10 = phase_on(10);
    assert_eq!(day10.phase, Phase::Luteal);
    assert!(day10.is_fertile);
    assert!(!day10.is_ovulation);

    assert_eq!(phase_on(13).phase, Phase::Ovulation);
    assert_eq!(phase_on(15).phase, Phase::Ovulation);

    let day16 = phase_on(16);
    assert_eq!(day16.phase, Phase::Luteal);
    assert!(day16.is_fertile);

    let day17 = phase_on(17);
    assert!(!day17.is_fertile);
    assert_eq!(phase_on(27).phase, Phase::Luteal);
    assert_eq!(phase_on(28).phase, Phase::Period);
  }

  #[test]
  fn test_thresholds_do_not_scale_with_cycle_length() {
    let profile = CycleProfile::new(35, 5, date(2024, 12, 1)).unwrap();
    let result = classify(date(2024, 12, 14), &profile).unwrap();
    assert_eq!(result.day_in_cycle, 13);
    assert!(result.is_ovulation);
  }

  #[test]
  fn test_short_cycle_never_reaches_fertile_window() {
    let profile = CycleProfile::new(7, 3, date(2024, 12, 1)).unwrap();
    for offset in 0..21 {
      let result = classify(add_days(profile.anchor_start, offset), &profile).unwrap();
      assert!(!result.is_fertile);
      assert!(!result.is_ovulation);
    }
  }

  #[test]
  fn test_long_period_masks_fertile_flags() {
    let profile = CycleProfile::new(28, 14, date(2024, 12, 1)).unwrap();
    let result = classify(add_days(profile.anchor_start, 13), &profile).unwrap();
    assert_eq!(result.phase, Phase::Period);
    assert!(result.is_period);
    assert!(!result.is_fertile);
    assert!(!result.is_ovulation);

    let after = classify(add_days(profile.anchor_start, 14), &profile).unwrap();
    assert_eq!(after.phase, Phase::Ovulation);
  }

  #[test]
  fn test_single_day_cycle_is_always_period() {
    let profile = CycleProfile::new(1, 1, date(2024, 12, 1)).unwrap();
    let result = classify(date(1999, 3, 7), &profile).unwrap();
    assert_eq!(result.day_in_cycle, 0);
    assert_eq!(result.phase, Phase::Period);
  }

  #[test]
  fn test_invalid_profile_rejected() {
    let profile = CycleProfile {
      cycle_length: 0,
      period_length: 5,
      anchor_start: date(2024, 12, 1),
    };
    assert!(matches!(
      classify(date(2024, 12, 14), &profile),
      Err(CycleError::InvalidCycleProfile(_))
    ));

    let profile = CycleProfile {
      cycle_length: 28,
      period_length: 29,
      anchor_start: date(2024, 12, 1),
    };
    assert!(matches!(
      classify(date(2024, 12, 14), &profile),
      Err(CycleError::InvalidCycleProfile(_))
    ));
  }

  #[test]
  fn test_classify_range_covers_every_day() {
    let days = classify_range(date(2024, 12, 1), date(2024, 12, 31), &sample_profile()).unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0].date, date(2024, 12, 1));
    assert_eq!(days[30].date, date(2024, 12, 31));
    assert_eq!(days.iter().filter(|d| d.is_period).count(), 5 + 3); // Dec 1-5 and Dec 29-31
  }

  #[test]
  fn test_classify_range_rejects_reversed_range() {
    let result = classify_range(date(2024, 12, 10), date(2024, 12, 1), &sample_profile());
    assert_eq!(
      result,
      Err(CycleError::InvalidRange {
        start: date(2024, 12, 10),
        end: date(2024, 12, 1),
      })
    );
  }

  /// -------------------------------------------------------------------------
  /// Properties
  /// -------------------------------------------------------------------------

  fn profiles() -> impl Strategy<Value = CycleProfile> {
    (1i64..=60)
      .prop_flat_map(|cycle| (Just(cycle), 1i64..=cycle, -20_000i64..20_000))
      .prop_map(|(cycle, period, anchor_offset)| CycleProfile {
        cycle_length: cycle,
        period_length: period,
        anchor_start: add_days(date(2024, 12, 1), anchor_offset),
      })
  }

  proptest! {
    #[test]
    fn prop_day_in_cycle_in_range(profile in profiles(), offset in -100_000i64..100_000) {
      let result = classify(add_days(date(2024, 12, 1), offset), &profile).unwrap();
      prop_assert!(result.day_in_cycle >= 0);
      prop_assert!(result.day_in_cycle < profile.cycle_length);
    }

    #[test]
    fn prop_classification_is_periodic(profile in profiles(), offset in -100_000i64..100_000) {
      let day = add_days(date(2024, 12, 1), offset);
      let here = classify(day, &profile).unwrap();
      let next = classify(add_days(day, profile.cycle_length), &profile).unwrap();
      prop_assert_eq!(here.day_in_cycle, next.day_in_cycle);
      prop_assert_eq!(here.phase, next.phase);
    }

    #[test]
    fn prop_flags_agree_with_phase(profile in profiles(), offset in -100_000i64..100_000) {
      let result = classify(add_days(date(2024, 12, 1), offset), &profile).unwrap();
      if result.is_period {
        prop_assert_eq!(result.phase, Phase::Period);
        prop_assert!(!result.is_fertile && !result.is_ovulation);
      }
      if result.is_ovulation {
        prop_assert_eq!(result.phase, Phase::Ovulation);
        prop_assert!(result.is_fertile);
      }
    }

    #[test]
    fn prop_classify_is_idempotent(profile in profiles(), offset in -100_000i64..100_000) {
      let day = add_days(date(2024, 12, 1), offset);
      prop_assert_eq!(classify(day, &profile).unwrap(), classify(day, &profile).unwrap());
    }
  }
}
