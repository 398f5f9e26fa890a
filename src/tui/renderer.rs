//! Terminal output renderer for content, prompts, and diagnostics.

use crate::tui::settings;
use crate::tui::style::{AnsiColor, Palette, Tone};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Handles all terminal output formatting.
///
/// Content goes to stdout; prompts and diagnostics go to stderr so piped
/// output stays clean.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
    palette: Palette,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool, palette: Palette) -> Self {
        Self { color, palette }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Print one plain line to stdout.
    pub fn line(&self, text: &str) {
        println!("{text}");
    }

    /// Print one line to stdout in the palette color for `tone`.
    pub fn tinted(&self, text: &str, tone: Tone) {
        self.colored(text, self.palette.color_for(tone));
    }

    /// Print one line to stdout in `color`.
    pub fn colored(&self, text: &str, color: AnsiColor) {
        if self.color {
            println!("{}", text.with(color.to_crossterm()));
        } else {
            println!("{text}");
        }
    }

    /// Print the interactive prompt (to stderr) without a trailing newline.
    pub fn prompt(&self, label: &str) {
        let mut err = io::stderr();
        if self.color {
            let _ = write!(
                err,
                "{}{}",
                label.with(self.palette.input_prompt.to_crossterm()).bold(),
                settings::PROMPT_SUFFIX
            );
        } else {
            let _ = write!(err, "{label}{}", settings::PROMPT_SUFFIX);
        }
        let _ = err.flush();
    }

    /// Print a warning line (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::LABEL_WARNING
                    .with(self.palette.warning.to_crossterm())
                    .bold(),
                msg
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print an error line (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::LABEL_ERROR
                    .with(self.palette.error.to_crossterm())
                    .bold(),
                msg
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }

    /// Print indented diagnostic detail (to stderr).
    pub fn detail(&self, text: &str) {
        if self.color {
            eprintln!(
                "{}{}",
                settings::INDENT_1,
                text.with(AnsiColor::BrightBlack.to_crossterm())
            );
        } else {
            eprintln!("{}{text}", settings::INDENT_1);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true, Palette::default())
    }
}
