//! Review pane: empty placeholder, loading indicator, error banner, or the
//! rendered review.

use crate::state::AppState;
use crate::view_models::ReviewPanelViewModel;
use crate::views::Ui;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use review_theme::Theme;

pub fn render(state: &AppState, theme: &Theme, ui: &mut Ui, area: Rect, frame: &mut Frame) {
    let vm = ReviewPanelViewModel::from_state(state);

    let mut block = Block::bordered()
        .border_style(theme.panel_border())
        .title(" Review Results ")
        .title_style(theme.panel_title());
    if let Some(badge) = vm.badge() {
        let badge_style = match vm {
            ReviewPanelViewModel::Loading { .. } => theme.loading(),
            ReviewPanelViewModel::Success { .. } => theme.success(),
            ReviewPanelViewModel::Error { .. } => theme.error(),
            ReviewPanelViewModel::Empty { .. } => theme.muted(),
        };
        block = block.title_top(Line::from(Span::styled(badge, badge_style)).right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    match vm {
        ReviewPanelViewModel::Empty { title, hint } => {
            render_empty(title, hint, theme, ui, inner, frame)
        }

        ReviewPanelViewModel::Loading { spinner, message } => {
            let lines = vec![
                Line::default(),
                Line::from(Span::styled(format!("{spinner} {message}"), theme.loading())),
                Line::default(),
                Line::from(Span::styled("This can take a moment.", theme.muted())),
            ];
            frame.render_widget(
                Paragraph::new(Text::from(lines)).alignment(Alignment::Center),
                inner,
            );
        }

        ReviewPanelViewModel::Error { message } => {
            let lines = vec![
                Line::default(),
                Line::from(Span::styled(format!("✗ {message}"), theme.error())),
                Line::default(),
                Line::from(Span::styled("Press ^R to try again.", theme.muted())),
            ];
            frame.render_widget(
                Paragraph::new(Text::from(lines)).alignment(Alignment::Center),
                inner,
            );
        }

        ReviewPanelViewModel::Success { banner, body } => {
            let mut lines = vec![
                Line::from(Span::styled(format!("✓ {banner}"), theme.success())),
                Line::default(),
            ];
            lines.extend(review_markdown::render(&body, theme, &mut ui.highlighter).lines);

            let total = lines.len() as u16;
            let scroll = state
                .review
                .scroll
                .min(total.saturating_sub(inner.height));

            frame.render_widget(
                Paragraph::new(Text::from(lines))
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                inner,
            );
        }
    }
}

fn render_empty(
    title: &str,
    hint: &str,
    theme: &Theme,
    ui: &Ui,
    inner: Rect,
    frame: &mut Frame,
) {
    let mut lines = vec![Line::default()];

    // Figlet banner when there is room for it
    if let Some(font) = &ui.banner_font {
        if let Some(figure) = font.convert("Review") {
            let banner = figure.to_string();
            let fits = banner.lines().map(|l| l.len()).max().unwrap_or(0) <= inner.width as usize
                && banner.lines().count() + 5 <= inner.height as usize;
            if fits {
                for line in banner.lines() {
                    lines.push(Line::from(Span::styled(line.to_string(), theme.muted())));
                }
            }
        }
    }

    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme.panel_title(),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(hint.to_string(), theme.muted())));

    frame.render_widget(
        Paragraph::new(Text::from(lines)).alignment(Alignment::Center),
        inner,
    );
}
