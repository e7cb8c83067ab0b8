//! Receiver abstraction layer
//!
//! The engine never talks to hardware directly: whatever reads the UART
//! (or replays a log) implements [`FixSource`] and hands over one raw
//! sentence per loop iteration.

pub mod error;
pub mod mock;
pub mod receiver;

pub use error::{CommError, CommResult};
pub use mock::MockFixSource;
pub use receiver::FixSource;

/// One raw sentence as delivered by the receiver, before parsing
#[derive(Debug, Clone, PartialEq)]
pub struct RawSentence {
    /// Sentence text, line terminators stripped
    pub text: String,
    /// Caller's monotonic clock at the moment of arrival (ms)
    pub received_ms: u64,
}

impl RawSentence {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim_end_matches(|c| c == '\r' || c == '\n').to_string(),
            received_ms: 0,
        }
    }

    pub fn with_received_ms(mut self, received_ms: u64) -> Self {
        self.received_ms = received_ms;
        self
    }
}
