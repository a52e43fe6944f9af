//! Baseline command set installed by every console build.

use super::command::{Command, Context};
use super::console::{confirm, msg, VERSION};
use super::error::{ConsoleError, ConsoleResult};
use super::help;
use super::registry::Registry;
use crate::terminal::Terminal;

/// Install the built-in commands: `help`, `exit`, `status`, `reboot`.
///
/// Device-specific capabilities are registered by their own subsystems on
/// top of this set.
pub fn register_builtins(registry: &mut Registry) {
    registry.add(Command::exact("help", "", "this help", cmd_help));
    registry.add(Command::exact(
        "exit",
        "",
        "close the console session",
        cmd_exit,
    ));
    registry.add(Command::exact(
        "status",
        "",
        "show build and session status",
        cmd_status,
    ));
    registry.add(Command::exact("reboot", "", "reboot the device", cmd_reboot));
}

fn cmd_help(ctx: &mut Context<'_>, _args: &[String]) -> ConsoleResult<String> {
    Ok(help::render(ctx.registry, ctx.term.escapes()))
}

fn cmd_exit(_ctx: &mut Context<'_>, _args: &[String]) -> ConsoleResult<String> {
    // The loop treats the end-of-stream sentinel as a clean shutdown.
    Err(ConsoleError::EndOfStream)
}

fn cmd_status(ctx: &mut Context<'_>, _args: &[String]) -> ConsoleResult<String> {
    msg("status requested from console");

    Ok(format!("{}\ncommands: {}", VERSION, ctx.registry.len()))
}

fn cmd_reboot(ctx: &mut Context<'_>, _args: &[String]) -> ConsoleResult<String> {
    if !confirm(ctx.term) {
        return Ok("reboot cancelled".to_string());
    }

    // The actual reset belongs to the platform collaborator; the console
    // reports intent.
    msg("reboot requested from console");

    Ok("rebooting".to_string())
}
