//! Terminal user-interface building blocks.
//!
//! This module hosts the terminal renderer, color handling, line input,
//! progress indicators, and terminal probing. The dispatch core only sees the
//! traits (`RenderSink`, `LineSource`, `TerminalProbe`); everything concrete
//! about the terminal lives here.

pub mod input;
pub mod progress;
pub mod renderer;
pub mod settings;
pub mod style;
pub mod terminal;
pub mod text;

pub use input::{LineSource, StdinLineReader};
pub use progress::{ProgressBar, ProgressKind, SpinnerStyle};
pub use renderer::Renderer;
pub use style::{AnsiColor, Palette, State, Tone};
pub use terminal::{CrosstermTerminal, TerminalProbe, TerminalSize};
