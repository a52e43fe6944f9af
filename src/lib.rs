//! # SerialConsole
//!
//! Interactive command console over a serial byte stream.
//!
//! A flat, single-command-per-line dispatcher for embedded operator
//! consoles: collaborators register [`Command`]s into a [`Registry`] at
//! startup, then [`Console::run`] reads lines from a [`Terminal`], resolves
//! each one to exactly one command (exact name match or regex with captured
//! arguments), and reports results or errors back to the session. The loop
//! survives malformed input indefinitely and ends only when the transport
//! closes.
//!
//! Not a shell: no piping, no scripting, no variables.

pub mod console;
pub mod terminal;

pub use console::{
    confirm, msg, register_builtins, Command, Console, ConsoleError, ConsoleResult, Context,
    Handler, Matcher, Registry,
};
pub use terminal::{Completer, Escapes, History, SerialTerminal, Terminal};
