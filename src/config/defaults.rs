//! Default configuration constants.
//!
//! Keeping defaults in one module lets the data model and the file resolver
//! share the same literals.

/// Application name used until one is configured.
pub(super) const DEFAULT_APP_NAME: &str = "cli";
/// Application version used until one is configured.
pub(super) const DEFAULT_APP_VERSION: &str = "0.0.0";
/// Greeting shown when interactive mode starts; `{name}` is substituted.
pub(super) const DEFAULT_GREET_MESSAGE: &str = "Welcome to {name} interactive mode!";
/// Farewell shown when interactive mode ends.
pub(super) const DEFAULT_GOODBYE_MESSAGE: &str = "Goodbye!";
/// File name searched in the working directory and the global config root.
pub(super) const CONFIG_FILE_NAME: &str = "kli.toml";
/// Directory under the platform config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "kli";
