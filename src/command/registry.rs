//! Insertion-ordered command registry with unique names.

use super::{Command, CommandBuilder};
use crate::error::DuplicateCommandError;

/// Process-scoped list of commands, kept in registration order for help.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a command with `configure` and add it to the registry.
    ///
    /// The name is checked before `configure` runs, so a duplicate leaves
    /// both the registry and anything `configure` would touch unchanged.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        configure: F,
    ) -> Result<&Command, DuplicateCommandError>
    where
        F: FnOnce(&mut CommandBuilder),
    {
        let name = name.into();
        if self.contains(&name) {
            return Err(DuplicateCommandError { name });
        }

        let mut builder = CommandBuilder::new(name, description.into());
        configure(&mut builder);
        let command = builder.finish();
        tracing::debug!(command = %command.name, "registered command");
        self.commands.push(command);
        Ok(&self.commands[self.commands.len() - 1])
    }

    /// Command registered under exactly `name`.
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
