//! Terminal abstraction consumed by the console loop.
//!
//! [`Terminal`] is the line-editing contract: blocking line reads with an
//! end-of-stream sentinel, line writes, a mutable prompt, and named escape
//! codes. [`SerialTerminal`] implements it over any blocking byte stream.

pub mod completion;
pub mod history;
pub mod serial;

pub use completion::Completer;
pub use history::History;
pub use serial::SerialTerminal;

use std::io;

use crate::console::ConsoleResult;

/// Named escape codes used for prompts and help colouring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escapes {
    pub red: &'static str,
    pub cyan: &'static str,
    pub reset: &'static str,
}

impl Escapes {
    /// Standard ANSI colour codes.
    pub const ANSI: Escapes = Escapes {
        red: "\x1b[31m",
        cyan: "\x1b[36m",
        reset: "\x1b[0m",
    };

    /// No colouring, for dumb transports and tests.
    pub const NONE: Escapes = Escapes {
        red: "",
        cyan: "",
        reset: "",
    };
}

/// Line-oriented terminal session.
///
/// Supplied by the transport side and consumed by the console loop; one
/// session is owned by one loop invocation for its lifetime.
pub trait Terminal {
    /// Blocking read of one line, without its terminator.
    ///
    /// Fails with [`EndOfStream`](crate::console::ConsoleError::EndOfStream)
    /// once the transport closes.
    fn read_line(&mut self) -> ConsoleResult<String>;

    /// Write `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Replace the prompt shown before each read.
    fn set_prompt(&mut self, prompt: &str);

    /// The prompt currently in effect.
    fn prompt(&self) -> &str;

    /// Escape codes honoured by this session.
    fn escapes(&self) -> &Escapes;

    /// Seed tab-completion candidates. Sessions without completion ignore
    /// this.
    fn set_completions(&mut self, _candidates: Vec<String>) {}
}
