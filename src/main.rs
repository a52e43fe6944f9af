//! SerialConsole - stdio demo entry point
//!
//! A real deployment hands `Console::serve` a hardware serial stream; stdio
//! stands in for it here. The host tty is line-buffered, so editing keys are
//! handled by the tty rather than the console's own editor.

use std::io::{self, Read, Write};

use anyhow::Result;

use serial_console::console::{msg, register_builtins, Command, Console, Context, Registry};
use serial_console::{ConsoleError, ConsoleResult};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut registry = Registry::new();
    register_builtins(&mut registry);
    registry.add(Command::pattern(
        "set-speed",
        r"^set speed (\d+)$",
        1,
        "set speed <bps>",
        "set the line speed",
        cmd_set_speed,
    )?);

    msg("console ready on stdio");

    Console::new(&registry).serve(Stdio::new());

    msg("console closed");
    Ok(())
}

fn cmd_set_speed(_ctx: &mut Context<'_>, args: &[String]) -> ConsoleResult<String> {
    let bps = args
        .first()
        .ok_or_else(|| ConsoleError::Handler("missing speed".to_string()))?;

    Ok(format!("speed set to {} bps", bps))
}

/// Process stdio as one bidirectional stream.
struct Stdio {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Stdio {
    fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Read for Stdio {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stdin.read(buf)
    }
}

impl Write for Stdio {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
