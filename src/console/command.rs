//! Command descriptors and line matching.

use regex::Regex;

use super::error::ConsoleResult;
use super::registry::Registry;
use crate::terminal::Terminal;

/// Everything a handler may touch while servicing one input line.
pub struct Context<'a> {
    /// Terminal session the line arrived on.
    pub term: &'a mut dyn Terminal,
    /// Registry the command was dispatched from.
    pub registry: &'a Registry,
}

/// Handler invoked with the captured arguments of a matched line.
///
/// Returns the result line to print, or an error for the loop to log.
/// Returning [`EndOfStream`](super::ConsoleError::EndOfStream) closes the
/// session.
pub type Handler = fn(&mut Context<'_>, &[String]) -> ConsoleResult<String>;

/// How a command claims an input line.
#[derive(Debug)]
pub enum Matcher {
    /// The line must equal the command name, byte for byte.
    Exact,
    /// The pattern must match the line and capture exactly `args` groups.
    Pattern { regex: Regex, args: usize },
}

/// A registered console command.
#[derive(Debug)]
pub struct Command {
    /// Unique key; also the line that selects an exact command.
    pub name: String,
    pub matcher: Matcher,
    /// Usage string shown in the help table.
    pub syntax: String,
    /// One-line description shown in the help table.
    pub help: String,
    pub handler: Handler,
}

impl Command {
    /// Command matched by its name alone.
    pub fn exact(
        name: impl Into<String>,
        syntax: impl Into<String>,
        help: impl Into<String>,
        handler: Handler,
    ) -> Self {
        Self {
            name: name.into(),
            matcher: Matcher::Exact,
            syntax: syntax.into(),
            help: help.into(),
            handler,
        }
    }

    /// Command matched by a regular expression capturing `args` arguments.
    ///
    /// The pattern is compiled here, once, at registration time.
    pub fn pattern(
        name: impl Into<String>,
        pattern: &str,
        args: usize,
        syntax: impl Into<String>,
        help: impl Into<String>,
        handler: Handler,
    ) -> ConsoleResult<Self> {
        Ok(Self {
            name: name.into(),
            matcher: Matcher::Pattern {
                regex: Regex::new(pattern)?,
                args,
            },
            syntax: syntax.into(),
            help: help.into(),
            handler,
        })
    }

    /// Captured arguments when `line` selects this command, `None` otherwise.
    ///
    /// Exact commands capture nothing. A pattern command matches only when
    /// its capture-group count (whole match excluded) equals the declared
    /// argument count; groups that did not participate capture as empty
    /// strings.
    pub fn try_match(&self, line: &str) -> Option<Vec<String>> {
        match &self.matcher {
            Matcher::Exact => (self.name == line).then(Vec::new),
            Matcher::Pattern { regex, args } => {
                let caps = regex.captures(line)?;
                if caps.len() - 1 != *args {
                    return None;
                }
                Some(
                    (1..caps.len())
                        .map(|i| {
                            caps.get(i)
                                .map_or_else(String::new, |m| m.as_str().to_string())
                        })
                        .collect(),
                )
            }
        }
    }
}
