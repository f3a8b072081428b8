//! Header bar: title on the left, language indicator on the right.

use crate::layout;
use crate::state::AppState;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use review_theme::Theme;

pub fn render(state: &AppState, theme: &Theme, area: Rect, frame: &mut Frame) {
    let bar = Style::default().bg(theme.bg_panel);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ⚡ ", Style::default().fg(theme.accent_primary).bg(theme.bg_panel)),
            Span::styled(
                "review-tui",
                Style::default()
                    .fg(theme.text_primary)
                    .bg(theme.bg_panel)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  AI code review", Style::default().fg(theme.text_muted).bg(theme.bg_panel)),
        ]))
        .style(bar),
        area,
    );

    // The clickable language indicator; also toggled with ^L
    let indicator = layout::language_indicator(frame.area());
    let label = format!(" {} ▾ ", state.language.selected);
    let style = if state.language.is_open {
        theme.selected()
    } else {
        Style::default()
            .fg(theme.accent_primary)
            .bg(theme.bg_overlay)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style)).right_aligned())
            .style(Style::default().bg(theme.bg_overlay)),
        indicator,
    );
}
