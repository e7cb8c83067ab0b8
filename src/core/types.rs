//! Core data types for the photo-trigger engine

use serde::{Deserialize, Serialize};

/// One GPS-reported position and time sample, already converted to
/// signed decimal degrees.
///
/// Produced by the sentence parser; immutable once built. The evaluator
/// keeps exactly one previous `GpsFix` for delta computation and replaces
/// it (never mutates it) on every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsFix {
    /// Latitude in decimal degrees, south negative
    pub latitude: f64,
    /// Longitude in decimal degrees, west negative
    pub longitude: f64,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub month: u8,
    pub day: u8,
    /// Full year (sentence carries two digits; parser adds the century)
    pub year: u16,
}

impl GpsFix {
    /// Time of day carried by this fix, at minute granularity
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hour,
            minute: self.minute,
        }
    }
}

/// Wall-clock time at minute granularity, used for the daily capture window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Minutes elapsed since midnight, for linear comparisons
    pub fn minutes_from_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Whether the fields denote a real clock time
    pub fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60
    }
}

/// Outcome of one trigger evaluation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Capture condition met; caller should photograph and then `reset()`
    Capture,
    /// Nothing due this tick (not yet over threshold, outside the window,
    /// outside the halo, or still establishing a baseline)
    NoCapture,
}

impl Decision {
    pub fn is_capture(&self) -> bool {
        matches!(self, Decision::Capture)
    }
}
