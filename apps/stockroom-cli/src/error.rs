//! # CLI Error Type
//!
//! Errors that can end a console session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  ValidationError ──► printed, operator re-prompted      (recovered)    │
//! │  CoreError       ──► printed, back to the menu          (recovered)    │
//! │                                                                         │
//! │  CliError::InputClosed ──► session ends, exit code 0                    │
//! │  CliError::Io          ──► session ends, exit code 1                    │
//! │  CliError::LogFilter / Logging ──► startup fails, exit code 1           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operator mistakes never become a `CliError`.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// stdin reached end of stream while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    /// The `--log-filter` value does not parse.
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global tracing subscriber was already installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
