//! I/O boundary traits for testability
//!
//! These traits abstract terminal I/O, allowing the session dialogue
//! to be tested with scripted implementations.

use std::io;
use std::io::{BufRead, Write};

/// Line-oriented terminal abstraction.
pub trait Console: Send + Sync {
    /// Read one line of input, without the trailing newline.
    /// Returns `None` once input is exhausted.
    fn read_line(&self) -> io::Result<Option<String>>;

    /// Write text without a trailing newline and flush (for prompts).
    fn write(&self, text: &str) -> io::Result<()>;

    /// Write one full line of output.
    fn write_line(&self, text: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real console bound to stdin/stdout.
#[derive(Debug, Default)]
pub struct StdioConsole;

impl Console for StdioConsole {
    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn write_line(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")
    }
}
