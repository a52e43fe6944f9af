//! Insertion-ordered command registry.

use super::command::Command;

/// The set of installed commands.
///
/// Dispatch order is registration order: the first command whose matcher
/// claims a line wins, so overlapping patterns resolve deterministically.
/// Re-registering a name replaces the entry in place, keeping its position.
///
/// Owned by the application root and borrowed by the console loop;
/// registration happens at startup, before the loop runs.
pub struct Registry {
    commands: Vec<Command>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Install a command, replacing any previous entry with the same name.
    pub fn add(&mut self, command: Command) {
        match self.commands.iter_mut().find(|c| c.name == command.name) {
            Some(slot) => *slot = command,
            None => self.commands.push(command),
        }
    }

    /// First command in registration order that claims `line`, with its
    /// captured arguments.
    pub fn find(&self, line: &str) -> Option<(&Command, Vec<String>)> {
        self.commands
            .iter()
            .find_map(|c| c.try_match(line).map(|args| (c, args)))
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Command names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name.as_str())
    }

    /// Installed commands, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Number of installed commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
