//! Application configuration from TOML files and environment variables.
//!
//! Config is resolved in this order of precedence (highest wins):
//! 1. Environment variables (`KLI_INTERACTIVE`, `KLI_SHOW_PROMPT`, `NO_COLOR`)
//! 2. TOML file passed explicitly by the embedding application
//! 3. `./kli.toml` in the current directory
//! 4. `<config_dir>/kli/kli.toml` (e.g. `~/.config/kli/kli.toml`)
//! 5. The base config supplied in code, itself defaulting to built-ins
//!
//! ```toml
//! [app]
//! name = "mycli"
//! version = "0.1.6"
//! description = "My first CLI app!"
//!
//! [interactive]
//! enabled = true
//! show_prompt = true
//!
//! [interactive.greet]
//! message = "Welcome to {name}!"
//! color = "bright-green"
//!
//! [colors]
//! primary = "cyan"
//! ```

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use env::{ENV_INTERACTIVE, ENV_NO_COLOR, ENV_SHOW_PROMPT};
pub use loader::{load_config, load_config_with_base};
pub use types::{AppConfig, Banner, ConfigSource, InteractiveMode, LoadedConfig};
