//! GPS Photo-Trigger Engine
//!
//! Decides, from a moving vehicle's GPS stream, whether to capture a
//! photograph based on elapsed time, elapsed distance, and an optional
//! circular geofence ("halo").
//!
//! The crate covers the trigger-evaluation and positional-tracking core:
//! sentence parsing into a normalized [`GpsFix`], great-circle distance
//! computation, and the stateful [`TriggerEvaluator`] that accumulates
//! deltas across ticks and evaluates the compound capture condition.
//! Camera control, image encoding, and storage are external collaborators
//! behind the [`FixSource`] seam and the [`Decision`] output.
//!
//! The engine is single-threaded: one polling loop owns the evaluator,
//! feeds it fixes in arrival order with monotonically non-decreasing
//! timestamps, and calls [`TriggerEvaluator::reset`] after acting on a
//! capture.

pub mod core;
pub mod hardware;
pub mod processing;
pub mod trigger;
pub mod utils;

// Re-export commonly used types
pub use self::core::types::{Decision, GpsFix, TimeOfDay};
pub use hardware::{CommError, CommResult, FixSource, MockFixSource, RawSentence};
pub use processing::{distance_m, ParseError, ParseResult, SentenceParser};
pub use trigger::{CaptureWindow, TriggerEvaluator, TriggerState, WindowPolicy};
pub use utils::{ConfigError, ConfigResult, HaloConfig, TriggerConfig};
