//! Configuration data model.
//!
//! `AppConfig` is the resolved, read-only view consumed by the dispatcher.
//! The `File*` structs mirror the TOML layout; every field is optional so a
//! file only needs to mention what it overrides.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_APP_NAME, DEFAULT_APP_VERSION, DEFAULT_GOODBYE_MESSAGE, DEFAULT_GREET_MESSAGE,
};
use crate::tui::style::{AnsiColor, Palette};

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub description: String,
    pub interactive: InteractiveMode,
    /// Print the global help after a "command not found" error.
    pub show_usage_on_error: bool,
    /// Show a prompt before each interactive read.
    pub show_prompt: bool,
    /// Whether ANSI color/style output is enabled.
    pub color: bool,
    pub colors: Palette,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
            version: DEFAULT_APP_VERSION.to_string(),
            description: String::new(),
            interactive: InteractiveMode::default(),
            show_usage_on_error: true,
            show_prompt: true,
            color: true,
            colors: Palette::default(),
        }
    }
}

impl AppConfig {
    /// Text printed for `--version`.
    pub fn version_line(&self) -> String {
        format!("{} version {}", self.name, self.version)
    }
}

/// Interactive-mode toggles and banners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveMode {
    /// Enter the read loop when invoked without arguments.
    pub enabled: bool,
    pub greet: Option<Banner>,
    pub goodbye: Option<Banner>,
}

impl Default for InteractiveMode {
    fn default() -> Self {
        Self {
            enabled: true,
            greet: Some(Banner::new(DEFAULT_GREET_MESSAGE)),
            goodbye: Some(Banner::new(DEFAULT_GOODBYE_MESSAGE)),
        }
    }
}

/// Message shown on entering or leaving interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub show: bool,
    pub color: AnsiColor,
    /// Message text; `{name}` expands to the application name.
    pub message: String,
}

impl Banner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            show: true,
            color: AnsiColor::BrightGreen,
            message: message.into(),
        }
    }

    /// Message with placeholders expanded for `app_name`.
    pub fn render(&self, app_name: &str) -> String {
        self.message.replace("{name}", app_name)
    }
}

/// Where the loaded configuration text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit path passed by the caller.
    Explicit(PathBuf),
    /// `./kli.toml` in the working directory.
    Local(PathBuf),
    /// `<config_dir>/kli/kli.toml`.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

/// Resolved configuration plus its provenance.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

// ---------------------------------------------------------------------------
// File layout
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub(super) app: FileApp,
    pub(super) interactive: FileInteractive,
    pub(super) display: FileDisplay,
    pub(super) colors: FileColors,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileApp {
    pub(super) name: Option<String>,
    pub(super) version: Option<String>,
    pub(super) description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileInteractive {
    pub(super) enabled: Option<bool>,
    pub(super) show_prompt: Option<bool>,
    pub(super) show_usage_on_error: Option<bool>,
    pub(super) greet: Option<FileBanner>,
    pub(super) goodbye: Option<FileBanner>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileBanner {
    pub(super) show: Option<bool>,
    pub(super) color: Option<String>,
    pub(super) message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileDisplay {
    pub(super) color: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileColors {
    pub(super) primary: Option<String>,
    pub(super) secondary: Option<String>,
    pub(super) error: Option<String>,
    pub(super) warning: Option<String>,
    pub(super) success: Option<String>,
    pub(super) info: Option<String>,
    pub(super) input_prompt: Option<String>,
    pub(super) user_input: Option<String>,
    pub(super) debug: Option<String>,
}
