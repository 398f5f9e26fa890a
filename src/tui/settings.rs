//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, labels, column widths,
//! and progress behavior.

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
/// Column width that command and flag names are padded to in help listings.
pub const NAME_COLUMN_WIDTH: usize = 15;

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_SUFFIX: &str = "> ";
pub const CONFIRM_SUFFIX: &str = " [y/N]";

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const LABEL_CAUSE: &str = "caused by:";

pub const INTERACTIVE_HINT: &str = "Type 'help' for available commands, 'exit' to quit";
pub const SELECT_TITLE: &str = "Select an option:";
pub const INVALID_SELECTION: &str = "Invalid selection";

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

pub const PROGRESS_CLEAR_LINE: &str = "\r\x1b[2K";
pub const PROGRESS_DEFAULT_WIDTH: usize = 30;
pub const PROGRESS_DEFAULT_TOTAL: u64 = 100;
