//! Terminal wiring for the engine capabilities.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tictactoe_core::{ClearScreen, InputSource, OutputSink, TransportError};

/// Writes to stdout, flushing after every write so prompts appear before blocking reads.
pub struct StdoutSink {
    stdout: io::Stdout,
}

impl StdoutSink {
    /// Creates a sink over the process stdout.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for StdoutSink {
    fn write(&mut self, text: &str) -> Result<(), TransportError> {
        let mut lock = self.stdout.lock();
        lock.write_all(text.as_bytes())?;
        lock.flush()?;
        Ok(())
    }
}

/// Reads lines from any buffered reader, stdin in the binary.
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    fn read_line(&mut self) -> Result<String, TransportError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(TransportError::new("Input closed"));
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }
}

/// Clears the terminal and homes the cursor.
pub struct TerminalClear;

impl ClearScreen for TerminalClear {
    fn clear(&mut self) -> Result<(), TransportError> {
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
