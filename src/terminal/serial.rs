//! Line editing over a blocking byte stream.
//!
//! Implements the [`Terminal`] contract for any `io::Read + io::Write`
//! transport: prompt echo, backspace, kill-line, interrupt, arrow-key
//! history, and tab completion. One byte at a time, no threads.

use std::io::{self, ErrorKind, Read, Write};

use super::{Completer, Escapes, History, Terminal};
use crate::console::{ConsoleError, ConsoleResult};

/// Escape sequence parser state.
#[derive(Clone, Copy, PartialEq, Eq)]
enum EscapeState {
    Normal,
    Escape,  // got ESC
    Bracket, // got ESC [
}

/// Terminal session over a blocking byte stream.
pub struct SerialTerminal<S> {
    stream: S,
    prompt: String,
    escapes: Escapes,
    history: History,
    completer: Completer,
    candidates: Vec<String>,
    line: String,
    escape_state: EscapeState,
    /// A LF arriving right after CR belongs to the same terminator.
    swallow_lf: bool,
}

impl<S: Read + Write> SerialTerminal<S> {
    /// Session with ANSI escapes and an empty prompt.
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            prompt: String::new(),
            escapes: Escapes::ANSI,
            history: History::new(),
            completer: Completer::new(),
            candidates: Vec::new(),
            line: String::new(),
            escape_state: EscapeState::Normal,
            swallow_lf: false,
        }
    }

    /// Builder-style prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Use different escape codes, e.g. [`Escapes::NONE`] for dumb links.
    pub fn with_escapes(mut self, escapes: Escapes) -> Self {
        self.escapes = escapes;
        self
    }

    /// Consume the session and hand the stream back.
    pub fn into_stream(self) -> S {
        self.stream
    }

    fn read_byte(&mut self) -> ConsoleResult<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.stream.read(&mut byte) {
                Ok(0) => return Err(ConsoleError::EndOfStream),
                Ok(_) => return Ok(byte[0]),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(ConsoleError::Read(err)),
            }
        }
    }

    /// Echo bytes back to the operator. Echo failures are not line errors;
    /// the read side decides when the session is over.
    fn emit(&mut self, bytes: &[u8]) {
        let _ = self.stream.write_all(bytes);
        let _ = self.stream.flush();
    }

    fn show_prompt(&mut self) {
        let _ = self.stream.write_all(self.prompt.as_bytes());
        let _ = self.stream.flush();
    }

    /// Handle one byte outside an escape sequence; returns the finished line.
    fn feed(&mut self, byte: u8) -> Option<String> {
        match byte {
            // Enter (CR, LF, or CRLF)
            b'\r' | b'\n' => {
                self.swallow_lf = byte == b'\r';
                self.emit(b"\r\n");

                let line = std::mem::take(&mut self.line);
                if !line.is_empty() {
                    self.history.push(&line);
                }
                Some(line)
            }

            // Backspace
            0x7F | 0x08 => {
                if self.line.pop().is_some() {
                    self.emit(b"\x08 \x08");
                }
                self.completer.reset();
                self.history.reset_nav();
                None
            }

            // Tab
            b'\t' => {
                self.complete_word();
                None
            }

            // Escape
            0x1B => {
                self.escape_state = EscapeState::Escape;
                None
            }

            // Ctrl+C: drop the line, start over
            0x03 => {
                self.emit(b"^C\r\n");
                self.line.clear();
                self.show_prompt();
                None
            }

            // Ctrl+U: kill the line
            0x15 => {
                for _ in 0..self.line.len() {
                    self.emit(b"\x08 \x08");
                }
                self.line.clear();
                None
            }

            // Printable character
            0x20..=0x7E => {
                self.line.push(byte as char);
                self.emit(&[byte]);
                self.completer.reset();
                self.history.reset_nav();
                None
            }

            _ => None,
        }
    }

    /// Complete the command word. Arguments are free-form, so completion
    /// applies only while the line has no space yet.
    fn complete_word(&mut self) {
        if self.line.contains(' ') {
            return;
        }

        let prefix = self.line.clone();
        let completed = self
            .completer
            .complete(&prefix, self.candidates.iter().map(String::as_str))
            .map(str::to_string);

        if let Some(word) = completed {
            for _ in 0..prefix.len() {
                self.emit(b"\x08 \x08");
            }
            self.line = word.clone();
            self.emit(word.as_bytes());
        }
    }

    fn handle_up(&mut self) {
        if let Some(prev) = self.history.prev().map(str::to_string) {
            self.replace_line(&prev);
        }
    }

    fn handle_down(&mut self) {
        match self.history.next().map(str::to_string) {
            Some(next) => self.replace_line(&next),
            // Past the newest entry: back to an empty line
            None => self.replace_line(""),
        }
    }

    /// Erase the displayed line and replace it with `text`.
    fn replace_line(&mut self, text: &str) {
        for _ in 0..self.line.len() {
            self.emit(b"\x08 \x08");
        }
        self.line.clear();
        self.line.push_str(text);
        self.emit(text.as_bytes());
    }
}

impl<S: Read + Write> Terminal for SerialTerminal<S> {
    fn read_line(&mut self) -> ConsoleResult<String> {
        self.line.clear();
        self.escape_state = EscapeState::Normal;
        self.show_prompt();

        loop {
            // A partial line is discarded when the transport fails mid-read.
            let byte = self.read_byte()?;

            if self.swallow_lf {
                self.swallow_lf = false;
                if byte == b'\n' {
                    continue;
                }
            }

            match self.escape_state {
                EscapeState::Normal => {
                    if let Some(line) = self.feed(byte) {
                        return Ok(line);
                    }
                }
                EscapeState::Escape => {
                    self.escape_state = if byte == b'[' {
                        EscapeState::Bracket
                    } else {
                        EscapeState::Normal
                    };
                }
                EscapeState::Bracket => {
                    self.escape_state = EscapeState::Normal;
                    match byte {
                        b'A' => self.handle_up(),   // Up arrow
                        b'B' => self.handle_down(), // Down arrow
                        _ => {}
                    }
                }
            }
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        // Serial peers expect CRLF line endings.
        let text = line.replace('\n', "\r\n");
        self.stream.write_all(text.as_bytes())?;
        self.stream.write_all(b"\r\n")?;
        self.stream.flush()
    }

    fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn escapes(&self) -> &Escapes {
        &self.escapes
    }

    fn set_completions(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
    }
}
