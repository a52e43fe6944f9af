//! Interactive command console.
//!
//! A registry of named commands matched against operator-entered lines:
//! exact-name commands and regex pattern commands with captured arguments.
//! The loop reads lines from a [`Terminal`](crate::terminal::Terminal),
//! dispatches the first match in registration order, and reports results or
//! errors back to the session; it terminates only when the transport closes.

pub mod builtins;
pub mod command;
pub mod console;
pub mod error;
pub mod help;
pub mod registry;

pub use builtins::register_builtins;
pub use command::{Command, Context, Handler, Matcher};
pub use console::{confirm, msg, Console, VERSION};
pub use error::{ConsoleError, ConsoleResult};
pub use registry::Registry;
