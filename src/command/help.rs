//! Help text rendering.
//!
//! Rendering is pure: these functions build strings and leave the choice of
//! output stream to the caller.

use super::{Command, CommandRegistry};
use crate::config::AppConfig;
use crate::tui::settings::{INDENT_1, NAME_COLUMN_WIDTH};
use crate::tui::text::two_column_row;

const BUILTIN_HELP_FLAG: &str = "--help, -h";
const BUILTIN_HELP_DESCRIPTION: &str = "Show command help";

/// Full help for one command.
///
/// Blocks, separated by blank lines: usage, description (if any),
/// arguments (if any), flags (if any), then the built-in flags.
pub fn render_command_help(command: &Command) -> String {
    let mut blocks = vec![usage_line(command)];

    if !command.description().is_empty() {
        blocks.push(command.description().to_string());
    }

    if !command.arguments().is_empty() {
        let rows = command
            .arguments()
            .iter()
            .map(|arg| two_column_row(INDENT_1, &arg.name, NAME_COLUMN_WIDTH, &arg.description));
        blocks.push(section("Arguments:", rows));
    }

    if !command.flags().is_empty() {
        let rows = command.flags().iter().map(|flag| {
            two_column_row(
                INDENT_1,
                &display_flag(&flag.name),
                NAME_COLUMN_WIDTH,
                &flag.description,
            )
        });
        blocks.push(section("Flags:", rows));
    }

    let builtin = two_column_row(
        INDENT_1,
        BUILTIN_HELP_FLAG,
        NAME_COLUMN_WIDTH,
        BUILTIN_HELP_DESCRIPTION,
    );
    blocks.push(section("Built-in flags:", std::iter::once(builtin)));

    blocks.join("\n\n")
}

/// Short command listing used by the interactive `help` line.
pub fn render_listing(registry: &CommandRegistry) -> String {
    let mut lines = vec!["Available commands:".to_string()];
    if registry.is_empty() {
        lines.push(format!("{INDENT_1}(none registered)"));
    }
    for command in registry.iter() {
        lines.push(two_column_row(
            INDENT_1,
            command.name(),
            NAME_COLUMN_WIDTH,
            command.description(),
        ));
    }
    lines.push(String::new());
    lines.push("You can also:".to_string());
    lines.push(format!("{INDENT_1}- Start commands with parameters directly"));
    lines.push(format!("{INDENT_1}- Use flags like --help or --version"));
    lines.join("\n")
}

/// Application-level help: title, usage, then the command listing.
pub fn render_global_help(config: &AppConfig, registry: &CommandRegistry) -> String {
    let title = if config.description.is_empty() {
        config.name.clone()
    } else {
        format!("{} - {}", config.name, config.description)
    };
    format!(
        "{title}\nUsage:\n{INDENT_1}<command> [arguments] [options]\n\n{}",
        render_listing(registry)
    )
}

fn usage_line(command: &Command) -> String {
    let mut usage = format!("Usage: {}", command.name());
    for arg in command.arguments() {
        usage.push_str(&format!(" <{}>", arg.name));
    }
    usage.push_str(" [options]");
    usage
}

fn section(title: &str, rows: impl Iterator<Item = String>) -> String {
    let mut lines = vec![title.to_string()];
    lines.extend(rows);
    lines.join("\n")
}

/// Single-character names render as short flags, the rest as long flags.
fn display_flag(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}
