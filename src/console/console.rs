//! Console loop, confirmation prompt, and banner logging.

use std::io::{Read, Write};

use log::{error, info};

use super::command::Context;
use super::error::{ConsoleError, ConsoleResult};
use super::help;
use super::registry::Registry;
use crate::terminal::{SerialTerminal, Terminal};

/// Version string for the default banner (set by build.rs, includes git hash).
pub const VERSION: &str = env!("VERSION_STRING");

const SEPARATOR: &str = "-";
const SEPARATOR_WIDTH: usize = 80;

/// Loop state; end-of-stream is the only transition out of `Running`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Terminated,
}

/// Interactive console bound to one registry.
pub struct Console<'r> {
    registry: &'r Registry,
    banner: String,
}

impl<'r> Console<'r> {
    /// Console with the default version banner.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            banner: VERSION.to_string(),
        }
    }

    /// Replace the banner printed when the loop starts.
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Dispatch one input line.
    ///
    /// Writes the handler's result line on success. Fails with
    /// [`ConsoleError::UnknownCommand`] when nothing matches; handler errors
    /// propagate verbatim with nothing written.
    pub fn handle(&self, term: &mut dyn Terminal, line: &str) -> ConsoleResult<()> {
        let (command, args) = self
            .registry
            .find(line)
            .ok_or(ConsoleError::UnknownCommand)?;

        let res = {
            let mut ctx = Context {
                term: &mut *term,
                registry: self.registry,
            };
            (command.handler)(&mut ctx, &args)?
        };

        let _ = term.write_line(&res);
        Ok(())
    }

    /// Run the loop until the stream closes.
    ///
    /// Prints the banner and the help listing, then reads and dispatches one
    /// line at a time. Read and dispatch errors are logged and the loop
    /// continues; only end-of-stream terminates it.
    pub fn run(&self, term: &mut dyn Terminal) {
        term.set_completions(self.registry.names().map(String::from).collect());

        let listing = help::render(self.registry, term.escapes());
        let _ = term.write_line(&self.banner);
        let _ = term.write_line("");
        let _ = term.write_line(&listing);

        let mut state = State::Running;

        while state == State::Running {
            let line = match term.read_line() {
                Ok(line) => line,
                Err(ConsoleError::EndOfStream) => {
                    state = State::Terminated;
                    continue;
                }
                Err(err) => {
                    error!("readline error: {err}");
                    continue;
                }
            };

            if line.is_empty() {
                continue;
            }

            match self.handle(term, &line) {
                Ok(()) => {}
                Err(err) if err.is_end_of_stream() => state = State::Terminated,
                Err(err) => error!("command error: {err}"),
            }
        }
    }

    /// Bind `stream` to a serial terminal with the standard red prompt and
    /// run the loop. Convenience entry point for transport collaborators.
    pub fn serve<S: Read + Write>(&self, stream: S) {
        let mut term = SerialTerminal::new(stream);
        let esc = *term.escapes();
        term.set_prompt(&format!("{}> {}", esc.red, esc.reset));
        self.run(&mut term);
    }
}

/// Yes/no prompt for destructive commands.
///
/// Returns true only when the operator answers exactly `y`. The caller's
/// prompt is restored on every path; a read error counts as "no".
pub fn confirm(term: &mut dyn Terminal) -> bool {
    let saved = term.prompt().to_string();
    term.set_prompt("Are you sure? (y/n) ");
    let answer = term.read_line();
    term.set_prompt(&saved);

    matches!(answer.as_deref(), Ok("y"))
}

/// Log an informational banner line: `-- <text>` padded with `-` to a fixed
/// width.
pub fn msg(text: &str) {
    let mut line = format!("{}{} {}", SEPARATOR, SEPARATOR, text);
    let pad = SEPARATOR_WIDTH.saturating_sub(line.len());
    line.push_str(&SEPARATOR.repeat(pad));

    info!("{line}");
}
