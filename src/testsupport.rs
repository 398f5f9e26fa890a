//! Shared test fixtures for dispatcher, command, and input test modules.
//!
//! Keeping the recording sink and scripted input here stops each test module
//! from rebuilding its own fakes for the capability traits.

use crate::tui::input::LineSource;
use crate::tui::style::{AnsiColor, Tone};
use crate::tui::terminal::{TerminalProbe, TerminalSize};
use crate::ui::render::RenderSink;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("kli-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// [`LineSource`] that replays a fixed script, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// [`LineSource`] whose every read fails.
#[derive(Debug, Default)]
pub struct BrokenInput;

impl LineSource for BrokenInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
    }
}

/// [`RenderSink`] that records everything it is asked to render.
///
/// Content lines are stored verbatim; prompts and diagnostics carry a short
/// prefix so tests can tell the channels apart. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    fn push(&self, line: String) {
        self.lines.lock().expect("capture sink poisoned").push(line);
    }

    /// Snapshot of everything recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("capture sink poisoned").clone()
    }

    /// Recorded content joined with newlines.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

impl RenderSink for CaptureSink {
    fn line(&self, text: &str) {
        self.push(text.to_string());
    }

    fn tinted(&self, text: &str, _tone: Tone) {
        self.push(text.to_string());
    }

    fn colored(&self, text: &str, _color: AnsiColor) {
        self.push(text.to_string());
    }

    fn prompt(&self, label: &str) {
        self.push(format!("prompt: {label}"));
    }

    fn warn(&self, msg: &str) {
        self.push(format!("warning: {msg}"));
    }

    fn error(&self, msg: &str) {
        self.push(format!("error: {msg}"));
    }

    fn detail(&self, text: &str) {
        self.push(format!("detail: {text}"));
    }
}

/// [`TerminalProbe`] with a fixed size and no real terminal behind it.
#[derive(Debug, Clone, Default)]
pub struct FakeTerminal {
    pub keys: Vec<char>,
}

impl TerminalProbe for FakeTerminal {
    fn size(&self) -> Option<TerminalSize> {
        Some(TerminalSize {
            columns: 80,
            rows: 24,
        })
    }

    fn clear_screen(&self) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor(&self, _x: u16, _y: u16) -> io::Result<()> {
        Ok(())
    }

    fn read_single_key(&self) -> io::Result<Option<char>> {
        Ok(self.keys.first().copied())
    }

    fn supports_ansi(&self) -> bool {
        false
    }
}
