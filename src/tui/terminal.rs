//! Terminal probing behind a narrow capability interface.
//!
//! Command actions reach the terminal through [`TerminalProbe`], so nothing in
//! the dispatch core depends on a concrete terminal backend.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, IsTerminal, Write};

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

/// Terminal capabilities available to command actions.
pub trait TerminalProbe {
    /// Current terminal size, if it can be determined.
    fn size(&self) -> Option<TerminalSize>;
    /// Clear the screen and home the cursor.
    fn clear_screen(&self) -> io::Result<()>;
    /// Move the cursor to 1-based column `x`, row `y`.
    fn move_cursor(&self, x: u16, y: u16) -> io::Result<()>;
    /// Read a single key press without waiting for Enter.
    fn read_single_key(&self) -> io::Result<Option<char>>;
    /// Whether stdout understands ANSI escape sequences.
    fn supports_ansi(&self) -> bool;
}

/// [`TerminalProbe`] backed by `crossterm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermTerminal;

impl TerminalProbe for CrosstermTerminal {
    fn size(&self) -> Option<TerminalSize> {
        terminal::size()
            .ok()
            .filter(|(columns, rows)| *columns > 0 && *rows > 0)
            .map(|(columns, rows)| TerminalSize { columns, rows })
    }

    fn clear_screen(&self) -> io::Result<()> {
        let mut out = io::stdout();
        out.queue(Clear(ClearType::All))?;
        out.queue(MoveTo(0, 0))?;
        out.flush()
    }

    fn move_cursor(&self, x: u16, y: u16) -> io::Result<()> {
        let mut out = io::stdout();
        out.queue(MoveTo(x.saturating_sub(1), y.saturating_sub(1)))?;
        out.flush()
    }

    fn read_single_key(&self) -> io::Result<Option<char>> {
        if !io::stdin().is_terminal() {
            return Ok(None);
        }
        terminal::enable_raw_mode()?;
        let key = read_key_event();
        // Restore cooked mode even when the read failed.
        terminal::disable_raw_mode()?;
        key
    }

    fn supports_ansi(&self) -> bool {
        io::stdout().is_terminal() && std::env::var("TERM").map_or(true, |term| term != "dumb")
    }
}

fn read_key_event() -> io::Result<Option<char>> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(match key.code {
                KeyCode::Char(c) => Some(c),
                KeyCode::Enter => Some('\n'),
                KeyCode::Tab => Some('\t'),
                KeyCode::Esc => Some('\u{1b}'),
                _ => None,
            });
        }
    }
}
