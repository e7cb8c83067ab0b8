//! Communication error types for fix sources

use std::fmt;

/// Communication errors at the receiver boundary
#[derive(Debug, Clone, PartialEq)]
pub enum CommError {
    /// Connection to the receiver failed or was lost
    ConnectionLost,
    /// Timeout waiting for a sentence
    Timeout { timeout_ms: u32 },
    /// Bytes read did not form a usable line
    MalformedRead { details: String },
}

impl fmt::Display for CommError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommError::ConnectionLost => write!(f, "Connection to receiver lost"),
            CommError::Timeout { timeout_ms } => {
                write!(f, "Receiver timeout after {}ms", timeout_ms)
            }
            CommError::MalformedRead { details } => write!(f, "Malformed read: {}", details),
        }
    }
}

impl std::error::Error for CommError {}

/// Result type for receiver communication
pub type CommResult<T> = Result<T, CommError>;
