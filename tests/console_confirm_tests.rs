//! Confirmation prompt tests

use std::collections::VecDeque;
use std::io;

use serial_console::console::{confirm, ConsoleError, ConsoleResult};
use serial_console::terminal::{Escapes, Terminal};

#[test]
fn test_confirm_yes() {
    let mut term = ScriptedTerminal::new(&[Reply::Line("y")]);
    term.set_prompt("> ");

    assert!(confirm(&mut term));
}

#[test]
fn test_confirm_anything_else_is_no() {
    for answer in ["n", "", "Y", "yes", " y", "y "] {
        let mut term = ScriptedTerminal::new(&[Reply::Line(answer)]);
        term.set_prompt("> ");

        assert!(!confirm(&mut term), "answer {:?}", answer);
    }
}

#[test]
fn test_confirm_read_error_is_no() {
    let mut term = ScriptedTerminal::new(&[Reply::ReadError]);
    term.set_prompt("> ");

    assert!(!confirm(&mut term));
}

#[test]
fn test_confirm_end_of_stream_is_no() {
    let mut term = ScriptedTerminal::new(&[]);
    term.set_prompt("> ");

    assert!(!confirm(&mut term));
}

#[test]
fn test_confirm_sets_question_prompt_for_the_read() {
    let mut term = ScriptedTerminal::new(&[Reply::Line("y")]);
    term.set_prompt("> ");

    confirm(&mut term);

    assert!(term
        .prompt_log
        .contains(&"Are you sure? (y/n) ".to_string()));
}

#[test]
fn test_confirm_restores_prompt_on_all_paths() {
    let scripts: &[&[Reply]] = &[
        &[Reply::Line("y")],
        &[Reply::Line("n")],
        &[Reply::ReadError],
        &[],
    ];

    for script in scripts {
        let mut term = ScriptedTerminal::new(script);
        term.set_prompt("device> ");

        confirm(&mut term);

        assert_eq!(term.prompt(), "device> ");
    }
}

// --- Scripted terminal mock ---

#[derive(Clone, Copy)]
enum Reply {
    Line(&'static str),
    ReadError,
}

struct ScriptedTerminal {
    replies: VecDeque<Reply>,
    prompt: String,
    /// Every prompt ever set, for restore assertions.
    prompt_log: Vec<String>,
}

impl ScriptedTerminal {
    fn new(replies: &[Reply]) -> Self {
        Self {
            replies: replies.iter().copied().collect(),
            prompt: String::new(),
            prompt_log: Vec::new(),
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self) -> ConsoleResult<String> {
        match self.replies.pop_front() {
            Some(Reply::Line(s)) => Ok(s.to_string()),
            Some(Reply::ReadError) => Err(ConsoleError::Read(io::Error::new(
                io::ErrorKind::Other,
                "scripted failure",
            ))),
            None => Err(ConsoleError::EndOfStream),
        }
    }

    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }

    fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
        self.prompt_log.push(prompt.to_string());
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn escapes(&self) -> &Escapes {
        &Escapes::NONE
    }
}
