//! Status bar: key hints on the left, request status on the right.

use crate::state::AppState;
use crate::view_models::StatusBarViewModel;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use review_theme::Theme;

pub fn render(state: &AppState, theme: &Theme, area: Rect, frame: &mut Frame) {
    let vm = StatusBarViewModel::from_state(state);
    let bar = Style::default().bg(theme.bg_panel);

    let mut spans = Vec::with_capacity(vm.hints.len() * 2 + 1);
    spans.push(Span::styled(" ", bar));
    for (key, description) in &vm.hints {
        spans.push(Span::styled(format!("{key} "), theme.key_hint().bg(theme.bg_panel)));
        spans.push(Span::styled(
            format!("{description}  "),
            theme.key_description().bg(theme.bg_panel),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);

    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                format!("{} ", vm.status),
                theme.muted().bg(theme.bg_panel),
            ))
            .right_aligned(),
        )
        .style(bar),
        area,
    );
}
