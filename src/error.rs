//! Unified error types for the toolkit.

use std::fmt;
use std::io;

/// Boxed error returned by command actions.
pub type ActionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type returned by command actions.
pub type ActionResult = Result<(), ActionError>;

// ---------------------------------------------------------------------------
// DuplicateCommandError
// ---------------------------------------------------------------------------

/// A command name collided with one that is already registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCommandError {
    pub name: String,
}

impl fmt::Display for DuplicateCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command '{}' is already registered", self.name)
    }
}

impl std::error::Error for DuplicateCommandError {}

// ---------------------------------------------------------------------------
// Crash
// ---------------------------------------------------------------------------

/// Anything that reached the dispatcher's crash boundary.
#[derive(Debug)]
pub enum Crash {
    /// A command could not be registered.
    Registration(DuplicateCommandError),
    /// A command action returned an error.
    Action { command: String, source: ActionError },
    /// A command action (or the dispatcher itself) panicked.
    Panic {
        command: Option<String>,
        message: String,
    },
    /// The interactive line source failed or was closed.
    Input(io::Error),
}

impl Crash {
    /// Name of the command involved, when there is one.
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::Action { command, .. } => Some(command),
            Self::Panic { command, .. } => command.as_deref(),
            Self::Registration(_) | Self::Input(_) => None,
        }
    }
}

impl fmt::Display for Crash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registration(_) => write!(f, "command registration failed"),
            Self::Action { command, .. } => write!(f, "error executing command '{command}'"),
            Self::Panic {
                command: Some(command),
                message,
            } => write!(f, "command '{command}' panicked: {message}"),
            Self::Panic {
                command: None,
                message,
            } => write!(f, "panicked: {message}"),
            Self::Input(_) => write!(f, "input unavailable"),
        }
    }
}

impl std::error::Error for Crash {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Registration(e) => Some(e),
            Self::Action { source, .. } => Some(source.as_ref()),
            Self::Input(e) => Some(e),
            Self::Panic { .. } => None,
        }
    }
}

impl From<DuplicateCommandError> for Crash {
    fn from(e: DuplicateCommandError) -> Self {
        Self::Registration(e)
    }
}

impl From<io::Error> for Crash {
    fn from(e: io::Error) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// FzfError
// ---------------------------------------------------------------------------

/// Errors from the fuzzy-finder wrapper.
#[derive(Debug)]
pub enum FzfError {
    /// `fzf --version` failed or printed nothing.
    NotInstalled,
    /// fzf exited with its documented error status.
    Failed(String),
    /// fzf exited with a status it does not document.
    UnknownExit(i32),
    Io(io::Error),
}

impl fmt::Display for FzfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInstalled => write!(f, "fzf is not installed or not on PATH"),
            Self::Failed(msg) => write!(f, "fzf error: {msg}"),
            Self::UnknownExit(code) => write!(f, "unknown fzf error (code {code})"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for FzfError {}

impl From<io::Error> for FzfError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
