use crate::core::types::{Decision, GpsFix};
use crate::processing::geodesy;
use crate::utils::config::TriggerConfig;

/// Logical state of the trigger engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Accumulating; no capture due
    Armed,
    /// Condition met; waiting for the caller to act and call [`TriggerEvaluator::reset`]
    Triggered,
}

/// Stateful capture-trigger engine.
///
/// Owns the accumulated distance and time since the last capture plus the
/// last known position, and decides on each tick whether the capture
/// condition has been met. The evaluator is a plain value owned by the
/// polling loop; it never performs I/O and never fails — malformed fixes
/// are rejected upstream by the parser and malformed configuration by the
/// config loader.
///
/// The evaluator does not know whether a capture actually succeeded: after
/// acting on a [`Decision::Capture`] the caller must invoke [`reset`]
/// (unconditionally, whether or not the photograph was written) to rearm.
///
/// [`reset`]: TriggerEvaluator::reset
#[derive(Debug, Clone)]
pub struct TriggerEvaluator {
    config: TriggerConfig,
    accumulated_distance_m: f64,
    accumulated_time_ms: u64,
    last_position: Option<GpsFix>,
    last_tick_ms: Option<u64>,
    state: TriggerState,
}

impl TriggerEvaluator {
    /// Create an evaluator for a validated configuration
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            accumulated_distance_m: 0.0,
            accumulated_time_ms: 0,
            last_position: None,
            last_tick_ms: None,
            state: TriggerState::Armed,
        }
    }

    /// Evaluate one fix against the trigger condition.
    ///
    /// `now_ms` is the caller's monotonic clock; fixes must arrive in
    /// order with non-decreasing timestamps (caller contract, see the
    /// crate docs).
    ///
    /// Tracking always advances: the accumulators and the stored previous
    /// position are updated on every tick before any veto is applied, so a
    /// tick spent outside the halo still contributes its distance and time
    /// once the vehicle re-enters.
    pub fn evaluate_tick(&mut self, fix: &GpsFix, now_ms: u64) -> Decision {
        // First fix establishes the baseline only; there is no previous
        // position to measure a delta from.
        let previous = match self.last_position.take() {
            Some(previous) => previous,
            None => {
                self.last_position = Some(fix.clone());
                self.last_tick_ms = Some(now_ms);
                return Decision::NoCapture;
            }
        };

        self.accumulated_distance_m += geodesy::distance_m(&previous, fix);
        self.last_position = Some(fix.clone());

        if let Some(last_tick) = self.last_tick_ms {
            self.accumulated_time_ms += now_ms.saturating_sub(last_tick);
        }
        self.last_tick_ms = Some(now_ms);

        // Geofence veto takes precedence over every other condition
        if let Some(halo) = &self.config.halo {
            let from_center = geodesy::distance_to_point_m(fix, halo.latitude, halo.longitude);
            if from_center >= halo.radius_m {
                return Decision::NoCapture;
            }
        }

        if !self.config.window().contains(fix.time_of_day()) {
            return Decision::NoCapture;
        }

        if self.accumulated_distance_m >= self.config.min_distance_m
            && self.accumulated_time_ms >= self.config.min_delay_ms
        {
            self.state = TriggerState::Triggered;
            return Decision::Capture;
        }

        Decision::NoCapture
    }

    /// Rearm after the caller has acted on a capture decision.
    ///
    /// Clears both accumulators but keeps the last position: fresh
    /// accumulation continues from where the vehicle is, not from a zero
    /// reference.
    pub fn reset(&mut self) {
        self.accumulated_distance_m = 0.0;
        self.accumulated_time_ms = 0;
        self.state = TriggerState::Armed;
    }

    /// Distance accumulated since the last reset (m)
    pub fn accumulated_distance_m(&self) -> f64 {
        self.accumulated_distance_m
    }

    /// Time accumulated since the last reset (ms)
    pub fn accumulated_time_ms(&self) -> u64 {
        self.accumulated_time_ms
    }

    /// Last position the tracker advanced to, if any fix was seen yet
    pub fn last_position(&self) -> Option<&GpsFix> {
        self.last_position.as_ref()
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Configuration this evaluator runs under
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }
}
