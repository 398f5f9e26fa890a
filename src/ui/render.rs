//! Rendering contracts and default terminal renderer bindings.
//!
//! `RenderSink` is the output contract consumed by the dispatcher and by
//! command actions. Keeping it under `ui` decouples dispatch logic from a
//! specific terminal renderer.

use crate::tui::style::{AnsiColor, Tone};

use crate::tui::renderer::Renderer;

/// Injectable rendering interface used by the dispatch core.
///
/// `Renderer` is the default terminal implementation; tests substitute a
/// recording sink without touching stdout/stderr.
pub trait RenderSink: Send + Sync {
    /// Render one plain content line.
    fn line(&self, text: &str);
    /// Render one content line in the palette color for `tone`.
    fn tinted(&self, text: &str, tone: Tone);
    /// Render one content line in an explicit color.
    fn colored(&self, text: &str, color: AnsiColor);
    /// Render the interactive prompt chrome for `label`.
    fn prompt(&self, label: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Render additional diagnostic detail beneath an error.
    fn detail(&self, text: &str);
}

impl RenderSink for Renderer {
    fn line(&self, text: &str) {
        self.line(text);
    }

    fn tinted(&self, text: &str, tone: Tone) {
        self.tinted(text, tone);
    }

    fn colored(&self, text: &str, color: AnsiColor) {
        self.colored(text, color);
    }

    fn prompt(&self, label: &str) {
        self.prompt(label);
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }

    fn detail(&self, text: &str) {
        self.detail(text);
    }
}

/// Render a multi-line block one line at a time.
pub fn render_block(sink: &dyn RenderSink, block: &str) {
    for line in block.lines() {
        sink.line(line);
    }
}
