//! Console error taxonomy.

use std::io;

use thiserror::Error;

/// Errors surfaced by registration, dispatch, and the console loop.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// No registered command matched the input line.
    #[error("unknown command, type `help`")]
    UnknownCommand,

    /// A command handler rejected its input or failed while running.
    #[error("{0}")]
    Handler(String),

    /// The transport closed; the only condition that ends the console loop.
    #[error("end of stream")]
    EndOfStream,

    /// Transport read failure other than stream closure.
    #[error("read error: {0}")]
    Read(#[from] io::Error),

    /// A pattern command was registered with an invalid regular expression.
    #[error("invalid command pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ConsoleError {
    /// True when this error terminates the console loop.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ConsoleError::EndOfStream)
    }
}

/// Result type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
