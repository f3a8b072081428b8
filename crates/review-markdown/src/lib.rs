//! Markdown rendering and syntax highlighting for review-tui
//!
//! Two pure building blocks:
//! - [`CodeHighlighter`]: per-language token coloring via syntect, used for
//!   the editor surface and for fenced code blocks inside reviews.
//! - [`render`]: markdown text into a ratatui [`ratatui::text::Text`],
//!   with code blocks re-highlighted through the same highlighter.
//!
//! Neither performs I/O nor touches application state; given the same
//! inputs they produce identical output.

pub mod highlight;
pub mod render;

pub use highlight::CodeHighlighter;
pub use render::render;
