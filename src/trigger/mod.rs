//! Stateful trigger evaluation: capture window and the tick engine

pub mod evaluator;
pub mod window;

pub use evaluator::{TriggerEvaluator, TriggerState};
pub use window::{CaptureWindow, WindowPolicy};
