//! Progress bar and spinner primitives for long-running command actions.
//!
//! Frame rendering is pure (`render_frame`, `spinner_frame`) so layouts are
//! testable; drawing writes carriage-return-prefixed frames to stderr.

use crate::tui::settings;
use crate::tui::text::repeat_char;
use std::io::{self, IsTerminal, Write};
use std::str::FromStr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

/// Visual style of a progress indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgressKind {
    /// `[=====     ] 50%`
    #[default]
    Bar,
    /// Animated spinner refreshed by a background thread.
    Spinner,
    /// Growing run of dots.
    Dots,
    /// `[▓▓▓▓░░░░] 50%`
    Blocks,
    /// Alternating arrows.
    Pulse,
}

impl FromStr for ProgressKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "spinner" => Ok(Self::Spinner),
            "dots" => Ok(Self::Dots),
            "blocks" => Ok(Self::Blocks),
            "pulse" => Ok(Self::Pulse),
            other => Err(format!(
                "unknown progress style '{other}' (expected bar, spinner, dots, blocks or pulse)"
            )),
        }
    }
}

/// Frame sets for [`ProgressKind::Spinner`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerStyle {
    #[default]
    Default,
    Dots,
    BouncingBar,
    Arrow,
    Pipe,
    GrowingDots,
}

impl SpinnerStyle {
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Default => &["|", "/", "-", "\\"],
            Self::Dots => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            Self::BouncingBar => &[
                "[    ]", "[=   ]", "[==  ]", "[=== ]", "[ ===]", "[  ==]", "[   =]",
            ],
            Self::Arrow => &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"],
            Self::Pipe => &["┤", "┘", "┴", "└", "├", "┌", "┬", "┐"],
            Self::GrowingDots => &[".  ", ".. ", "...", " ..", "  .", "   "],
        }
    }

    /// Delay between spinner frames.
    pub fn interval(self) -> Duration {
        Duration::from_millis(100)
    }
}

/// Configurable progress indicator.
///
/// Progress state is private; callers outside this module start from
/// [`ProgressBar::new`] and adjust the public layout fields.
///
/// ```
/// use kli::tui::{ProgressBar, ProgressKind};
///
/// let bar = ProgressBar::new().with_prefix("Copy").with_kind(ProgressKind::Blocks);
/// assert_eq!(bar.render_frame(), format!("Copy [{}] 0%", "░".repeat(30)));
/// ```
#[derive(Debug, Clone)]
pub struct ProgressBar {
    pub width: usize,
    pub symbol: char,
    pub empty_symbol: char,
    pub prefix: String,
    pub suffix: String,
    pub kind: ProgressKind,
    pub spinner_style: SpinnerStyle,
    current: u64,
    total: u64,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            width: settings::PROGRESS_DEFAULT_WIDTH,
            symbol: '=',
            empty_symbol: ' ',
            prefix: String::new(),
            suffix: "%".to_string(),
            kind: ProgressKind::Bar,
            spinner_style: SpinnerStyle::Default,
            current: 0,
            total: settings::PROGRESS_DEFAULT_TOTAL,
        }
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_kind(mut self, kind: ProgressKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Run `work` against this bar with progress reset to `0..=total`.
    ///
    /// Spinners animate on a background thread for the duration of `work`.
    /// The final line is cleared when `clear_on_finish` is set, otherwise
    /// it is kept and terminated with a newline.
    pub fn start<F>(&mut self, total: u64, clear_on_finish: bool, work: F)
    where
        F: FnOnce(&mut ProgressBar),
    {
        self.total = total.max(1);
        self.current = 0;

        let mut spinner = if self.kind == ProgressKind::Spinner {
            start_spinner(self.prefix.clone(), self.spinner_style)
        } else {
            ProgressHandle::disabled()
        };
        work(self);
        spinner.finish();

        let mut err = io::stderr();
        if clear_on_finish {
            let _ = write!(err, "{}", settings::PROGRESS_CLEAR_LINE);
        } else {
            let _ = writeln!(err);
        }
        let _ = err.flush();
    }

    /// Set progress to `value`, clamped to the configured total, and redraw.
    pub fn update(&mut self, value: u64) {
        self.current = value.min(self.total);
        if self.kind != ProgressKind::Spinner {
            let mut err = io::stderr();
            let _ = write!(err, "\r{}", self.render_frame());
            let _ = err.flush();
        }
    }

    pub fn increment(&mut self, step: u64) {
        self.update(self.current.saturating_add(step));
    }

    /// Render the current state without drawing it.
    ///
    /// Spinners are drawn by their refresher thread; for them this returns
    /// the first frame.
    pub fn render_frame(&self) -> String {
        let total = u128::from(self.total.max(1));
        let current = u128::from(self.current);
        let percent = current * 100 / total;
        let filled = (self.width as u128 * current / total) as usize;
        let empty = self.width.saturating_sub(filled);
        match self.kind {
            ProgressKind::Bar => format!(
                "{} [{}{}] {percent}{}",
                self.prefix,
                repeat_char(self.symbol, filled),
                repeat_char(self.empty_symbol, empty),
                self.suffix
            ),
            ProgressKind::Blocks => format!(
                "{} [{}{}] {percent}{}",
                self.prefix,
                repeat_char('▓', filled),
                repeat_char('░', empty),
                self.suffix
            ),
            ProgressKind::Dots => {
                let dots = (self.current / 5) as usize % self.width.max(1);
                format!("{}{}", self.prefix, repeat_char('.', dots))
            }
            ProgressKind::Pulse => {
                let arrow = if (self.current / 5) % 2 == 0 { "←" } else { "→" };
                format!("{} {arrow}", self.prefix)
            }
            ProgressKind::Spinner => spinner_frame(&self.prefix, self.spinner_style, 0),
        }
    }
}

/// Render spinner frame number `idx` (wrapping) after `prefix`.
pub fn spinner_frame(prefix: &str, style: SpinnerStyle, idx: usize) -> String {
    let frames = style.frames();
    format!("{prefix} {}", frames[idx % frames.len()])
}

/// RAII handle for an active spinner refresher.
pub struct ProgressHandle {
    /// Stop signal shared with the spinner thread.
    stop: Arc<AtomicBool>,
    /// Background writer thread, present only when the spinner is active.
    thread: Option<thread::JoinHandle<()>>,
}

impl ProgressHandle {
    /// Construct a no-op handle used when no spinner is drawn.
    pub(crate) fn disabled() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(true)),
            thread: None,
        }
    }

    /// Stop and clean up the spinner thread.
    pub fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Start a spinner on stderr; disabled when stderr is not a terminal.
pub fn start_spinner(prefix: String, style: SpinnerStyle) -> ProgressHandle {
    if !io::stderr().is_terminal() {
        return ProgressHandle::disabled();
    }

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let thread = thread::spawn(move || {
        let mut idx = 0usize;
        while !stop_flag.load(Ordering::Relaxed) {
            let mut err = io::stderr();
            let _ = write!(err, "\r{}", spinner_frame(&prefix, style, idx));
            let _ = err.flush();
            idx += 1;
            thread::sleep(style.interval());
        }
    });

    ProgressHandle {
        stop,
        thread: Some(thread),
    }
}
