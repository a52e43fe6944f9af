//! Help table rendering.

use std::fmt::Write;

use super::registry::Registry;
use crate::terminal::Escapes;

/// Minimum width of the name column.
const NAME_COL_MIN: usize = 14;

/// Render the command table: one row per command, sorted by name.
///
/// Columns are name, syntax, then the `# help` description, space-padded to
/// the widest entry. Deterministic for a fixed registry; the cyan wrap keeps
/// the listing visually distinct from command output.
pub fn render(registry: &Registry, escapes: &Escapes) -> String {
    let mut commands: Vec<_> = registry.iter().collect();
    commands.sort_by(|a, b| a.name.cmp(&b.name));

    let name_w = commands
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max(NAME_COL_MIN);
    let syntax_w = commands.iter().map(|c| c.syntax.len()).max().unwrap_or(0);

    let mut table = String::new();
    for c in &commands {
        let _ = writeln!(
            table,
            "{:<name_w$}  {:<syntax_w$}  # {}",
            c.name, c.syntax, c.help
        );
    }

    format!("{}{}{}", escapes.cyan, table.trim_end(), escapes.reset)
}
