//! In-memory capabilities for tests and scripted play.

use super::io::{ClearScreen, InputSource, OutputSink, TransportError};
use std::collections::VecDeque;

/// Input source replaying a fixed list of lines.
///
/// Running out of lines is a transport error, like a closed terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    consumed: usize,
}

impl ScriptedInput {
    /// Creates a source that yields `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            consumed: 0,
        }
    }

    /// Number of lines read so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Result<String, TransportError> {
        let line = self
            .lines
            .pop_front()
            .ok_or_else(|| TransportError::new("Scripted input exhausted"))?;
        self.consumed += 1;
        Ok(line)
    }
}

/// Output sink accumulating everything written.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl OutputSink for Transcript {
    fn write(&mut self, text: &str) -> Result<(), TransportError> {
        self.text.push_str(text);
        Ok(())
    }
}

/// Clear capability that only counts how often it was invoked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearCounter {
    count: usize,
}

impl ClearCounter {
    /// Number of clears so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl ClearScreen for ClearCounter {
    fn clear(&mut self) -> Result<(), TransportError> {
        self.count += 1;
        Ok(())
    }
}
