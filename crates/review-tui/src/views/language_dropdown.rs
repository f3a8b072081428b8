//! Language dropdown overlay, anchored under the header indicator.

use crate::layout;
use crate::state::{AppState, LanguageSelectorState};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, List, ListItem};
use ratatui::Frame;
use review_theme::Theme;

pub fn render(state: &AppState, theme: &Theme, area: Rect, frame: &mut Frame) {
    let dropdown = layout::language_dropdown(area);
    if dropdown.height < 3 {
        return;
    }

    frame.render_widget(Clear, dropdown);

    let items: Vec<ListItem> = LanguageSelectorState::entries()
        .iter()
        .enumerate()
        .map(|(idx, lang)| {
            let marker = if *lang == state.language.selected {
                "✓ "
            } else {
                "  "
            };
            let style = if idx == state.language.highlighted {
                theme.selected()
            } else {
                Style::default().fg(theme.text_primary).bg(theme.bg_overlay)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{lang}"),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::bordered()
            .border_style(theme.panel_border())
            .title(" Language ")
            .title_style(theme.panel_title())
            .style(Style::default().bg(theme.bg_overlay)),
    );

    frame.render_widget(list, dropdown);
}
