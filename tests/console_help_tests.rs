//! Help table rendering tests

use serial_console::console::{help, Command, ConsoleResult, Context, Registry};
use serial_console::terminal::Escapes;

#[test]
fn test_help_sorted_by_name() {
    let mut registry = Registry::new();
    registry.add(Command::exact("zeta", "", "last", noop));
    registry.add(Command::exact("alpha", "", "first", noop));
    registry.add(Command::exact("midway", "", "middle", noop));

    let table = help::render(&registry, &Escapes::NONE);
    let names: Vec<&str> = table
        .lines()
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();

    assert_eq!(names, ["alpha", "midway", "zeta"]);
}

#[test]
fn test_help_idempotent() {
    let mut registry = Registry::new();
    registry.add(Command::exact("status", "", "device status", noop));
    registry.add(Command::exact("reboot", "", "restart", noop));

    let first = help::render(&registry, &Escapes::NONE);
    let second = help::render(&registry, &Escapes::NONE);

    assert_eq!(first, second);
}

#[test]
fn test_help_duplicate_registration_keeps_latest_entry() {
    let mut registry = Registry::new();
    registry.add(Command::exact("status", "", "old description", noop));
    registry.add(Command::exact("status", "", "new description", noop));

    let table = help::render(&registry, &Escapes::NONE);

    assert_eq!(table.lines().count(), 1);
    assert!(table.contains("new description"));
    assert!(!table.contains("old description"));
}

#[test]
fn test_help_rows_carry_comment_marker() {
    let mut registry = Registry::new();
    registry.add(Command::exact("status", "", "device status", noop));
    registry.add(
        Command::pattern(
            "set-speed",
            r"^set speed (\d+)$",
            1,
            "set speed <bps>",
            "set the line speed",
            noop,
        )
        .unwrap(),
    );

    let table = help::render(&registry, &Escapes::NONE);

    for line in table.lines() {
        assert!(line.contains(" # "), "row missing comment marker: {:?}", line);
    }
    assert!(table.contains("set speed <bps>"));
}

#[test]
fn test_help_columns_aligned() {
    let mut registry = Registry::new();
    registry.add(Command::exact("up", "", "short name", noop));
    registry.add(Command::exact("factory-reset", "", "long name", noop));

    let table = help::render(&registry, &Escapes::NONE);
    let marker_cols: Vec<usize> = table.lines().map(|l| l.find('#').unwrap()).collect();

    assert!(marker_cols.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_help_wrapped_in_cyan() {
    let mut registry = Registry::new();
    registry.add(Command::exact("status", "", "device status", noop));

    let table = help::render(&registry, &Escapes::ANSI);

    assert!(table.starts_with("\x1b[36m"));
    assert!(table.ends_with("\x1b[0m"));
}

#[test]
fn test_help_empty_registry() {
    let registry = Registry::new();
    assert_eq!(help::render(&registry, &Escapes::NONE), "");
}

// --- Handlers ---

fn noop(_ctx: &mut Context<'_>, _args: &[String]) -> ConsoleResult<String> {
    Ok(String::new())
}
