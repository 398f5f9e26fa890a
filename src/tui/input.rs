//! Line-oriented user input.
//!
//! The dispatcher and command actions read through the [`LineSource`]
//! capability so interactive flows can be driven by scripted input in tests.
//! Prompt chrome is rendered through a [`RenderSink`] before each read.

use crate::tui::settings;
use crate::tui::style::Tone;
use crate::ui::render::RenderSink;
use std::io::{self, BufRead, IsTerminal};

/// Source of input lines.
pub trait LineSource {
    /// Read one line without its trailing newline.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// [`LineSource`] over the process standard input.
///
/// When stdin is not a terminal the reader warns once, on its first read,
/// and then keeps reading plain lines.
#[derive(Debug)]
pub struct StdinLineReader {
    is_terminal: bool,
    warned_non_terminal: bool,
}

impl StdinLineReader {
    pub fn new() -> Self {
        Self {
            is_terminal: io::stdin().is_terminal(),
            warned_non_terminal: false,
        }
    }
}

impl Default for StdinLineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLineReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if !self.is_terminal && !self.warned_non_terminal {
            tracing::warn!("no terminal detected; falling back to plain standard input");
            self.warned_non_terminal = true;
        }
        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(buf)))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Prompt with `label` and read one line.
pub fn read_input(
    input: &mut dyn LineSource,
    sink: &dyn RenderSink,
    label: &str,
) -> io::Result<Option<String>> {
    sink.prompt(label);
    input.read_line()
}

/// Ask a yes/no question; only `y` and `yes` count as confirmation.
pub fn confirm(input: &mut dyn LineSource, sink: &dyn RenderSink, question: &str) -> io::Result<bool> {
    let label = format!("{question}{}", settings::CONFIRM_SUFFIX);
    let answer = read_input(input, sink, &label)?.unwrap_or_default();
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Present a numbered menu and return the chosen index.
///
/// Keeps asking until a valid 1-based choice is entered. Fails with
/// `UnexpectedEof` when input runs out and `InvalidInput` for an empty menu.
pub fn select(
    input: &mut dyn LineSource,
    sink: &dyn RenderSink,
    options: &[String],
) -> io::Result<usize> {
    if options.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "select requires at least one option",
        ));
    }
    sink.tinted(settings::SELECT_TITLE, Tone::Primary);
    for (idx, option) in options.iter().enumerate() {
        sink.line(&format!("{}) {option}", idx + 1));
    }

    let label = format!("Enter choice (1-{})", options.len());
    loop {
        let Some(raw) = read_input(input, sink, &label)? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a selection was made",
            ));
        };
        match raw.trim().parse::<usize>() {
            Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice - 1),
            _ => sink.tinted(settings::INVALID_SELECTION, Tone::Error),
        }
    }
}

/// Read a password from the controlling terminal without echo.
pub fn read_password(label: &str) -> io::Result<String> {
    rpassword::prompt_password(format!("{label}{}", settings::PROMPT_SUFFIX))
}
