//! Fix source trait: the seam between the engine and the serial reader

use crate::hardware::{CommResult, RawSentence};

/// Abstraction over whatever delivers raw fix sentences once per loop
/// iteration (a UART reader on the device, a mock or log replay in tests).
///
/// Blocking, buffering, and retry policy all live behind this trait; the
/// engine itself never waits on hardware.
pub trait FixSource {
    /// Poll for the next sentence.
    /// Returns `Ok(Some(sentence))` when one is available,
    /// `Ok(None)` when nothing has arrived yet (non-blocking),
    /// `Err(error)` when communication fails.
    fn read_sentence(&mut self) -> CommResult<Option<RawSentence>>;

    /// Whether the source considers itself connected and usable
    fn is_connected(&self) -> bool;

    /// Discard any buffered, unread data
    fn flush(&mut self) -> CommResult<()>;
}
