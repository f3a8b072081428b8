//! Settings overlay: theme and language, keyboard- and mouse-dismissable.

use crate::layout;
use crate::state::{AppState, SettingsRow};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use review_theme::Theme;

pub fn render(state: &AppState, theme: &Theme, area: Rect, frame: &mut Frame) {
    let panel = layout::settings_panel(area);
    if panel.height < 5 {
        return;
    }

    frame.render_widget(Clear, panel);

    let row_style = |row: SettingsRow| {
        if state.chrome.settings_focus == row {
            theme.selected()
        } else {
            Style::default().fg(theme.text_primary).bg(theme.bg_overlay)
        }
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  Theme      ‹ {} ›  ", state.chrome.theme_mode.label()),
            row_style(SettingsRow::Theme),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("  Language   ‹ {} ›  ", state.language.selected),
            row_style(SettingsRow::Language),
        )),
        Line::default(),
        Line::from(Span::styled(
            "  ↑↓ select · ←→ change · Esc close",
            theme.muted(),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_style(theme.panel_border())
                .title(" Settings ")
                .title_style(theme.panel_title())
                .style(Style::default().bg(theme.bg_overlay)),
        );

    frame.render_widget(paragraph, panel);
}
