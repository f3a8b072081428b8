//! Views - render the application state onto the terminal frame.
//!
//! Plain render functions, one per surface, composed by [`render`]. All
//! geometry comes from [`crate::layout`], which the reducers also use for
//! mouse hit-testing.

pub mod editor_view;
pub mod header;
pub mod language_dropdown;
pub mod review_view;
pub mod settings_view;
pub mod status_bar;

use crate::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use review_markdown::CodeHighlighter;
use review_theme::{Theme, ThemeMode};

/// Render-side context that outlives individual frames: the syntax
/// highlighter (with its memo cache) and the banner font.
pub struct Ui {
    pub highlighter: CodeHighlighter,
    highlighter_mode: ThemeMode,
    pub banner_font: Option<figlet_rs::FIGfont>,
}

impl Ui {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            highlighter: CodeHighlighter::with_theme_name(Theme::syntect_theme_name(mode)),
            highlighter_mode: mode,
            banner_font: figlet_rs::FIGfont::standard().ok(),
        }
    }

    /// Keep the syntect theme in step with the UI theme.
    fn sync_theme(&mut self, mode: ThemeMode) {
        if self.highlighter_mode != mode {
            self.highlighter
                .set_theme_name(Theme::syntect_theme_name(mode));
            self.highlighter_mode = mode;
        }
    }
}

/// Render the whole application for one frame.
pub fn render(state: &AppState, ui: &mut Ui, frame: &mut Frame) {
    let theme = Theme::for_mode(state.chrome.theme_mode);
    ui.sync_theme(state.chrome.theme_mode);

    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let panes = crate::layout::panes(area);
    header::render(state, &theme, panes.header, frame);
    editor_view::render(state, &theme, ui, panes.editor, frame);
    review_view::render(state, &theme, ui, panes.review, frame);
    status_bar::render(state, &theme, panes.status, frame);

    // Overlays render last, on top of the panes
    if state.chrome.settings_open {
        settings_view::render(state, &theme, area, frame);
    }
    if state.language.is_open {
        language_dropdown::render(state, &theme, area, frame);
    }
}
