use crate::core::types::TimeOfDay;
use serde::{Deserialize, Serialize};

/// How the daily window boundary test compares a fix time against the
/// configured start/stop pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WindowPolicy {
    /// Compose hour and minute into minutes-from-midnight and test the
    /// inclusive range. This is the corrected comparison.
    #[default]
    LinearMinutes,
    /// Compare hour and minute independently, each with `>=`/`<=`.
    /// Reproduces the legacy firmware test, including its paradoxical
    /// rejections (a 06:30 start rejects 07:05 because 5 < 30).
    PerField,
}

/// Daily capture window at minute granularity, boundaries inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureWindow {
    pub start: TimeOfDay,
    pub stop: TimeOfDay,
    pub policy: WindowPolicy,
}

impl CaptureWindow {
    pub fn new(start: TimeOfDay, stop: TimeOfDay) -> Self {
        Self {
            start,
            stop,
            policy: WindowPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: WindowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// A window spanning the whole day
    pub fn all_day() -> Self {
        Self::new(TimeOfDay::new(0, 0), TimeOfDay::new(23, 59))
    }

    /// Whether the given time of day falls inside the window
    pub fn contains(&self, time: TimeOfDay) -> bool {
        match self.policy {
            WindowPolicy::LinearMinutes => {
                let t = time.minutes_from_midnight();
                t >= self.start.minutes_from_midnight() && t <= self.stop.minutes_from_midnight()
            }
            WindowPolicy::PerField => {
                time.hour >= self.start.hour
                    && time.minute >= self.start.minute
                    && time.hour <= self.stop.hour
                    && time.minute <= self.stop.minute
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_window_basic() {
        let window = CaptureWindow::new(TimeOfDay::new(6, 0), TimeOfDay::new(20, 0));
        assert!(window.contains(TimeOfDay::new(6, 0)));
        assert!(window.contains(TimeOfDay::new(12, 30)));
        assert!(window.contains(TimeOfDay::new(20, 0)));
        assert!(!window.contains(TimeOfDay::new(5, 59)));
        assert!(!window.contains(TimeOfDay::new(20, 1)));
    }

    #[test]
    fn test_linear_window_accepts_minute_below_start_minute() {
        // 07:05 is after a 06:30 start even though 5 < 30
        let window = CaptureWindow::new(TimeOfDay::new(6, 30), TimeOfDay::new(20, 0));
        assert!(window.contains(TimeOfDay::new(7, 5)));
    }

    #[test]
    fn test_per_field_window_paradoxical_rejection() {
        // The legacy comparison rejects 07:05 for a 06:30 start
        let window = CaptureWindow::new(TimeOfDay::new(6, 30), TimeOfDay::new(20, 59))
            .with_policy(WindowPolicy::PerField);
        assert!(!window.contains(TimeOfDay::new(7, 5)));
        assert!(window.contains(TimeOfDay::new(7, 45)));
    }

    #[test]
    fn test_policies_agree_away_from_minute_boundaries() {
        let linear = CaptureWindow::new(TimeOfDay::new(6, 0), TimeOfDay::new(20, 59));
        let legacy = linear.with_policy(WindowPolicy::PerField);
        for hour in 0..24 {
            let t = TimeOfDay::new(hour, 30);
            assert_eq!(linear.contains(t), legacy.contains(t), "hour {}", hour);
        }
    }

    #[test]
    fn test_all_day_window() {
        let window = CaptureWindow::all_day();
        assert!(window.contains(TimeOfDay::new(0, 0)));
        assert!(window.contains(TimeOfDay::new(23, 59)));
    }
}
