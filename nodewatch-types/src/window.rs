//! Dense status windows from sparse daily observations.
//!
//! The monitoring API reports each node's history as an unordered, possibly
//! gappy list of per-day observations. The dashboard always renders a
//! fixed-length trailing window of calendar days, so this module fills the
//! gaps with the [`NO_DATA`] sentinel and guarantees a stable shape.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::status::{DailyStatus, HealthState, NO_DATA};

/// Window length rendered by the dashboard by default.
pub const DEFAULT_WINDOW_DAYS: usize = 30;

/// One day within a normalized window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStatus {
    pub date: NaiveDate,
    /// Raw status code, or [`NO_DATA`] when nothing was observed that day.
    pub code: i64,
}

impl DayStatus {
    pub fn health(&self) -> HealthState {
        HealthState::from_code(self.code)
    }
}

/// Errors from [`normalize`]. These are precondition violations, never
/// data-dependent: any observation list is accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("window length must be at least one day")]
    EmptyWindow,
    #[error("window extends beyond the supported calendar range")]
    OutOfRange,
}

/// Normalize sparse observations into a dense trailing window.
///
/// Produces exactly `window` entries, one per calendar day, for the `window`
/// days ending at `reference` inclusive, in ascending date order. Days with
/// no observation carry the [`NO_DATA`] sentinel.
///
/// All calendar arithmetic is plain [`NaiveDate`] math; the caller fixes the
/// timezone policy by choosing `reference` (the dashboard uses the current
/// UTC day).
///
/// Observation handling:
/// - dates that do not parse as `YYYY-MM-DD` are skipped, never an error;
/// - duplicate dates resolve last-write-wins in input order.
pub fn normalize(
    observations: &[DailyStatus],
    reference: NaiveDate,
    window: usize,
) -> Result<Vec<DayStatus>, WindowError> {
    if window == 0 {
        return Err(WindowError::EmptyWindow);
    }

    let start = reference
        .checked_sub_days(Days::new(window as u64 - 1))
        .ok_or(WindowError::OutOfRange)?;

    let mut by_day: HashMap<NaiveDate, i64> = HashMap::with_capacity(observations.len());
    for obs in observations {
        if let Ok(date) = obs.date.parse::<NaiveDate>() {
            by_day.insert(date, obs.color);
        }
    }

    Ok(start
        .iter_days()
        .take(window)
        .map(|date| DayStatus {
            date,
            code: by_day.get(&date).copied().unwrap_or(NO_DATA),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_observations_all_sentinel() {
        let window = normalize(&[], day("2024-01-03"), 30).unwrap();
        assert_eq!(window.len(), 30);
        assert!(window.iter().all(|d| d.code == NO_DATA));
    }

    #[test]
    fn test_reference_day_lands_last() {
        let obs = vec![DailyStatus::new("2024-01-03", 2)];
        let window = normalize(&obs, day("2024-01-03"), 30).unwrap();
        assert_eq!(window[29].date, day("2024-01-03"));
        assert_eq!(window[29].code, 2);
        assert!(window[..29].iter().all(|d| d.code == NO_DATA));
    }

    #[test]
    fn test_dates_ascend_one_day_apart() {
        let window = normalize(&[], day("2024-03-05"), 30).unwrap();
        for pair in window.windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }
        assert_eq!(window[0].date, day("2024-02-05"));
    }

    #[test]
    fn test_duplicate_dates_last_write_wins() {
        let obs = vec![
            DailyStatus::new("2024-01-03", 0),
            DailyStatus::new("2024-01-03", 2),
        ];
        let window = normalize(&obs, day("2024-01-03"), 30).unwrap();
        assert_eq!(window[29].code, 2);
    }

    #[test]
    fn test_malformed_dates_skipped() {
        let obs = vec![
            DailyStatus::new("not-a-date", 2),
            DailyStatus::new("2024-13-45", 2),
            DailyStatus::new("", 2),
            DailyStatus::new("2024-01-02", 1),
        ];
        let window = normalize(&obs, day("2024-01-03"), 3).unwrap();
        assert_eq!(window[1].code, 1);
        assert_eq!(window[0].code, NO_DATA);
        assert_eq!(window[2].code, NO_DATA);
    }

    #[test]
    fn test_observations_outside_window_ignored() {
        let obs = vec![DailyStatus::new("2023-11-01", 0)];
        let window = normalize(&obs, day("2024-01-03"), 30).unwrap();
        assert!(window.iter().all(|d| d.code == NO_DATA));
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = normalize(&[], day("2024-01-03"), 0).unwrap_err();
        assert_eq!(err, WindowError::EmptyWindow);
    }

    #[test]
    fn test_three_day_window_with_gap() {
        let obs = vec![
            DailyStatus::new("2024-01-01", 1),
            DailyStatus::new("2024-01-03", 0),
        ];
        let window = normalize(&obs, day("2024-01-03"), 3).unwrap();
        assert_eq!(
            window,
            vec![
                DayStatus {
                    date: day("2024-01-01"),
                    code: 1
                },
                DayStatus {
                    date: day("2024-01-02"),
                    code: NO_DATA
                },
                DayStatus {
                    date: day("2024-01-03"),
                    code: 0
                },
            ]
        );
    }

    #[test]
    fn test_leap_day_in_window() {
        let window = normalize(&[], day("2024-03-01"), 3).unwrap();
        assert_eq!(window[1].date, day("2024-02-29"));
    }

    #[test]
    fn test_large_window() {
        let window = normalize(&[], day("2024-01-01"), 365).unwrap();
        assert_eq!(window.len(), 365);
        assert_eq!(window[0].date, day("2023-01-02"));
    }
}
