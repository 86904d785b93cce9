//! Daily status codes and their health classification.

use serde::{Deserialize, Serialize};

/// Sentinel code meaning "no observation recorded for this day".
///
/// Reserved: the monitoring server only ever reports small non-negative
/// codes, so `-1` can never collide with a real observation.
pub const NO_DATA: i64 = -1;

/// One day's health-check outcome for a node, as reported by the API.
///
/// `date` is an ISO 8601 calendar day (`YYYY-MM-DD`); `color` is the raw
/// status code (0 = failed, 1 or 2 = healthy). The field is named `color`
/// on the wire because the server treats it as a display hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStatus {
    pub date: String,
    pub color: i64,
}

impl DailyStatus {
    pub fn new(date: impl Into<String>, color: i64) -> Self {
        Self {
            date: date.into(),
            color,
        }
    }

    /// Health classification of this observation.
    pub fn health(&self) -> HealthState {
        HealthState::from_code(self.color)
    }
}

/// Health classification of a single status code.
///
/// Ordered worst-first so that `max()` over a set of states picks the
/// healthiest and `min()` the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthState {
    /// The day's check failed (code 0).
    Failed,
    /// Code outside the documented set.
    Unknown,
    /// No observation recorded for the day.
    NoData,
    /// The day's check succeeded (code 1 or 2).
    Healthy,
}

impl HealthState {
    /// Classify a raw status code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => HealthState::Failed,
            1 | 2 => HealthState::Healthy,
            NO_DATA => HealthState::NoData,
            _ => HealthState::Unknown,
        }
    }

    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            HealthState::Healthy => "UP",
            HealthState::Failed => "DOWN",
            HealthState::Unknown => "?",
            HealthState::NoData => "-",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthState::Healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_classification() {
        assert_eq!(HealthState::from_code(0), HealthState::Failed);
        assert_eq!(HealthState::from_code(1), HealthState::Healthy);
        assert_eq!(HealthState::from_code(2), HealthState::Healthy);
        assert_eq!(HealthState::from_code(NO_DATA), HealthState::NoData);
        assert_eq!(HealthState::from_code(7), HealthState::Unknown);
        assert_eq!(HealthState::from_code(-3), HealthState::Unknown);
    }

    #[test]
    fn test_healthy_is_best() {
        let worst = [
            HealthState::Healthy,
            HealthState::Failed,
            HealthState::NoData,
        ]
        .into_iter()
        .min()
        .unwrap();
        assert_eq!(worst, HealthState::Failed);
    }

    #[test]
    fn test_wire_shape() {
        let status: DailyStatus =
            serde_json::from_str(r#"{"date":"2024-01-03","color":2}"#).unwrap();
        assert_eq!(status, DailyStatus::new("2024-01-03", 2));
        assert!(status.health().is_healthy());
    }
}
