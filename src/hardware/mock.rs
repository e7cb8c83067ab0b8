//! Mock fix source for testing and development

use crate::hardware::{CommError, CommResult, FixSource, RawSentence};
use std::collections::VecDeque;

/// Queue-backed fix source.
///
/// Sentences are handed out in FIFO order with scripted receive
/// timestamps, so loop behavior is reproducible without a receiver
/// attached.
pub struct MockFixSource {
    queue: VecDeque<RawSentence>,
    connected: bool,
}

impl MockFixSource {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            connected: true,
        }
    }

    /// Queue a raw sentence with the monotonic time it "arrived" at
    pub fn push_sentence(&mut self, text: &str, received_ms: u64) {
        self.queue.push_back(RawSentence::new(text).with_received_ms(received_ms));
    }

    /// Queue a synthetic valid fix built from position and time parts
    pub fn push_fix(
        &mut self,
        latitude_deg: f64,
        longitude_deg: f64,
        hour: u8,
        minute: u8,
        second: u8,
        received_ms: u64,
    ) {
        let (lat_token, lat_hemi) = encode_coordinate(latitude_deg, 'N', 'S', 2);
        let (lon_token, lon_hemi) = encode_coordinate(longitude_deg, 'E', 'W', 3);
        let text = format!(
            "$GPRMC,{:02}{:02}{:02},A,{},{},{},{},000.0,000.0,150607,,",
            hour, minute, second, lat_token, lat_hemi, lon_token, lon_hemi
        );
        self.push_sentence(&text, received_ms);
    }

    /// Simulate a dropped connection
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn reconnect(&mut self) {
        self.connected = true;
    }

    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }
}

impl Default for MockFixSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FixSource for MockFixSource {
    fn read_sentence(&mut self) -> CommResult<Option<RawSentence>> {
        if !self.connected {
            return Err(CommError::ConnectionLost);
        }
        Ok(self.queue.pop_front())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn flush(&mut self) -> CommResult<()> {
        self.queue.clear();
        Ok(())
    }
}

/// Encode signed decimal degrees back into the sentence's
/// degrees+minutes token and hemisphere letter
fn encode_coordinate(
    degrees: f64,
    positive: char,
    negative: char,
    degree_digits: usize,
) -> (String, char) {
    let hemisphere = if degrees < 0.0 { negative } else { positive };
    let magnitude = degrees.abs();
    let whole = magnitude.trunc();
    let minutes = (magnitude - whole) * 60.0;
    let token = format!(
        "{:0width$.0}{:07.4}",
        whole,
        minutes,
        width = degree_digits
    );
    (token, hemisphere)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::SentenceParser;

    #[test]
    fn test_fifo_order() {
        let mut source = MockFixSource::new();
        source.push_sentence("first", 0);
        source.push_sentence("second", 100);

        assert_eq!(source.read_sentence().unwrap().unwrap().text, "first");
        assert_eq!(source.read_sentence().unwrap().unwrap().text, "second");
        assert!(source.read_sentence().unwrap().is_none());
    }

    #[test]
    fn test_disconnect_errors() {
        let mut source = MockFixSource::new();
        source.push_sentence("pending", 0);
        source.disconnect();

        assert!(!source.is_connected());
        assert_eq!(source.read_sentence(), Err(CommError::ConnectionLost));

        source.reconnect();
        assert!(source.read_sentence().unwrap().is_some());
    }

    #[test]
    fn test_flush_discards_queue() {
        let mut source = MockFixSource::new();
        source.push_sentence("a", 0);
        source.push_sentence("b", 1);
        source.flush().unwrap();
        assert_eq!(source.queued_count(), 0);
    }

    #[test]
    fn test_synthetic_fix_parses_back() {
        let mut source = MockFixSource::new();
        source.push_fix(48.1173, 11.5167, 12, 35, 19, 0);
        source.push_fix(-33.7, -70.675, 1, 2, 3, 1000);

        let parser = SentenceParser::new();

        let north = source.read_sentence().unwrap().unwrap();
        let fix = parser.parse(&north.text).unwrap();
        assert!((fix.latitude - 48.1173).abs() < 1e-4);
        assert!((fix.longitude - 11.5167).abs() < 1e-4);
        assert_eq!((fix.hour, fix.minute, fix.second), (12, 35, 19));

        let south = source.read_sentence().unwrap().unwrap();
        let fix = parser.parse(&south.text).unwrap();
        assert!((fix.latitude + 33.7).abs() < 1e-4);
        assert!((fix.longitude + 70.675).abs() < 1e-4);
        assert_eq!(south.received_ms, 1000);
    }
}
