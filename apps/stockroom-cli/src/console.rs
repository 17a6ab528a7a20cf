//! # Console
//!
//! Line-based prompt/response over any `BufRead` + `Write` pair, plus the
//! validated readers every command uses.
//!
//! ## Reader Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read_positive_integer / read_non_numeric_text                          │
//! │                                                                         │
//! │   ┌──► print prompt ──► read line ──► validate (stockroom-core)         │
//! │   │                                        │                            │
//! │   │          invalid: print diagnostic ◄───┤                            │
//! │   └────────────────────────────────────────┘                            │
//! │                                            │ valid                      │
//! │                                            ▼                            │
//! │                                   return cleaned value                  │
//! │                                                                         │
//! │  No retry limit. The loop only ends on valid input, or when the input  │
//! │  stream closes (CliError::InputClosed).                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use stockroom_core::validation::{parse_positive_integer, validate_descriptive_text};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// A prompt text paired with the field name used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub field: &'static str,
    pub text: &'static str,
}

impl Prompt {
    pub const fn new(field: &'static str, text: &'static str) -> Self {
        Prompt { field, text }
    }
}

/// The operator's terminal.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Consumes the console, handing back the input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prints `prompt` (no newline) and reads one line, trimmed.
    ///
    /// ## Errors
    /// `InputClosed` at end of stream.
    pub fn read_line(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the operator enters a whole number greater than zero.
    pub fn read_positive_integer(&mut self, prompt: Prompt) -> CliResult<u64> {
        loop {
            let line = self.read_line(prompt.text)?;
            match parse_positive_integer(prompt.field, &line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(field = prompt.field, input = %line, error = ?err, "rejected number");
                    self.say(err)?;
                }
            }
        }
    }

    /// Prompts until the operator enters text that is neither empty nor all digits.
    pub fn read_non_numeric_text(&mut self, prompt: Prompt) -> CliResult<String> {
        loop {
            let line = self.read_line(prompt.text)?;
            match validate_descriptive_text(prompt.field, &line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(field = prompt.field, input = %line, error = ?err, "rejected text");
                    self.say(err)?;
                }
            }
        }
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> CliResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints an empty line.
    pub fn blank(&mut self) -> CliResult<()> {
        writeln!(self.output)?;
        Ok(())
    }
}
