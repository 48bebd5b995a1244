//! Capabilities the engine uses to talk to players.
//!
//! The engine never touches a terminal directly. Callers hand it an
//! output sink, an input source and optionally a way to clear the display.

use derive_more::{Display, Error};

/// Transport failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Transport error: {} at {}:{}", message, file, line)]
pub struct TransportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Creates a new transport error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for TransportError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Surfaces text to the players, in order, including embedded newlines.
pub trait OutputSink {
    /// Writes text.
    fn write(&mut self, text: &str) -> Result<(), TransportError>;
}

/// Supplies one line of player text per call, blocking until available.
pub trait InputSource {
    /// Reads one line without its line terminator. May be empty.
    fn read_line(&mut self) -> Result<String, TransportError>;
}

/// Resets the visible display before a render.
pub trait ClearScreen {
    /// Clears the display.
    fn clear(&mut self) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_tracks_location() {
        let err = TransportError::new("stdin closed");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Transport error: stdin closed at "));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let err = TransportError::from(io);
        assert_eq!(err.message, "I/O error: pipe gone");
    }
}
