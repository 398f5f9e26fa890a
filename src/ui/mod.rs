//! Output-facing UI facade.
//!
//! The dispatcher depends on `ui::render::RenderSink` rather than on the
//! concrete terminal renderer in `crate::tui`.

pub mod render;
