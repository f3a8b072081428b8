//! Editor pane: syntax-highlighted buffer with a visible cursor.

use crate::state::AppState;
use crate::views::Ui;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use review_theme::Theme;

pub fn render(state: &AppState, theme: &Theme, ui: &mut Ui, area: Rect, frame: &mut Frame) {
    let block = Block::bordered()
        .border_style(theme.panel_border())
        .title(" Code Editor ")
        .title_style(theme.panel_title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // Re-highlight on every frame; the highlighter memoizes per line
    let token = state.language.selected.syntax_token();
    let lines: Vec<Line> = state
        .editor
        .lines
        .iter()
        .map(|line| Line::from(ui.highlighter.highlight_line(token, line)))
        .collect();

    // Keep the cursor in view
    let scroll = state
        .editor
        .cursor_line
        .saturating_sub(inner.height as usize - 1) as u16;

    frame.render_widget(
        Paragraph::new(Text::from(lines)).scroll((scroll, 0)),
        inner,
    );

    // The terminal cursor marks the edit position unless an overlay is open
    if !state.language.is_open && !state.chrome.settings_open {
        let x = inner.x + (state.editor.cursor_col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + state.editor.cursor_line as u16 - scroll;
        frame.set_cursor_position(Position::new(x, y));
    }
}
