//! Markdown to ratatui `Text` rendering.
//!
//! Walks pulldown-cmark events and shapes them into styled terminal lines.
//! Fenced code blocks are buffered and re-highlighted through the
//! [`CodeHighlighter`], matching how the editor colors its own buffer.

use crate::highlight::CodeHighlighter;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use review_theme::Theme;

/// Render markdown into styled terminal text.
///
/// Pure: no I/O, no mutable application state. The highlighter's internal
/// memo cache is the only mutation, and it never changes output.
pub fn render(markdown: &str, theme: &Theme, highlighter: &mut CodeHighlighter) -> Text<'static> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut renderer = Renderer::new(theme, highlighter);

    for event in parser {
        renderer.event(event);
    }

    renderer.finish()
}

struct Renderer<'a> {
    theme: &'a Theme,
    highlighter: &'a mut CodeHighlighter,

    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,

    // Inline context
    bold: usize,
    italic: usize,
    strikethrough: usize,
    heading: Option<HeadingLevel>,

    // Block context
    quote_depth: usize,
    /// One entry per open list; `Some(n)` carries the next ordered index.
    list_stack: Vec<Option<u64>>,
    code_block: Option<String>,
    code_buffer: String,
}

impl<'a> Renderer<'a> {
    fn new(theme: &'a Theme, highlighter: &'a mut CodeHighlighter) -> Self {
        Self {
            theme,
            highlighter,
            lines: Vec::new(),
            current: Vec::new(),
            bold: 0,
            italic: 0,
            strikethrough: 0,
            heading: None,
            quote_depth: 0,
            list_stack: Vec::new(),
            code_block: None,
            code_buffer: String::new(),
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),

            Event::Text(text) => {
                if self.code_block.is_some() {
                    self.code_buffer.push_str(&text);
                } else {
                    self.push_text(&text);
                }
            }

            Event::Code(code) => {
                let style = Style::default().fg(self.theme.code);
                self.current.push(Span::styled(code.to_string(), style));
            }

            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.flush_line(),

            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "────────────────────────",
                    self.theme.muted(),
                )));
                self.blank_line();
            }

            // Raw HTML and the rest carry no terminal rendering here
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.heading = Some(level);
            }
            Tag::Paragraph => {}
            Tag::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                self.flush_line();
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => lang.to_string(),
                    _ => String::new(),
                };
                self.code_block = Some(lang);
                self.code_buffer.clear();
            }
            Tag::List(start) => {
                self.flush_line();
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.list_stack.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.current
                    .push(Span::styled(marker, Style::default().fg(self.theme.accent_primary)));
            }
            Tag::Emphasis => self.italic += 1,
            Tag::Strong => self.bold += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.heading = None;
                self.flush_line();
                self.blank_line();
            }
            TagEnd::Paragraph => {
                self.flush_line();
                self.blank_line();
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.blank_line();
            }
            TagEnd::CodeBlock => {
                let lang = self.code_block.take().unwrap_or_default();
                let code = std::mem::take(&mut self.code_buffer);
                for line in code.lines() {
                    let spans = self.highlighter.highlight_line(&lang, line);
                    self.lines.push(Line::from(spans));
                }
                self.blank_line();
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis => self.italic = self.italic.saturating_sub(1),
            TagEnd::Strong => self.bold = self.bold.saturating_sub(1),
            TagEnd::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        let span = Span::styled(text.to_string(), self.inline_style());
        self.current.push(span);
    }

    fn inline_style(&self) -> Style {
        if let Some(level) = self.heading {
            let mut style = Style::default()
                .fg(self.theme.heading)
                .add_modifier(Modifier::BOLD);
            if level == HeadingLevel::H1 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            return style;
        }

        let mut style = Style::default().fg(self.theme.text_primary);
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.strikethrough > 0 {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        style
    }

    /// Move the accumulated spans into a finished line.
    fn flush_line(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.current.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                self.theme.muted(),
            ));
        }
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn blank_line(&mut self) {
        if !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Text<'static> {
        self.flush_line();
        // Drop the trailing separator blank
        while matches!(self.lines.last(), Some(line) if line.spans.is_empty()) {
            self.lines.pop();
        }
        Text::from(self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_plain(markdown: &str) -> Vec<String> {
        let theme = Theme::dark();
        let mut highlighter = CodeHighlighter::new();
        render(markdown, &theme, &mut highlighter)
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn renders_level_one_heading() {
        let lines = render_plain("# Review\nLooks fine");
        assert_eq!(lines[0], "Review");
        assert!(lines.iter().any(|l| l.contains("Looks fine")));
    }

    #[test]
    fn heading_is_styled_distinctly() {
        let theme = Theme::dark();
        let mut highlighter = CodeHighlighter::new();
        let text = render("# Review", &theme, &mut highlighter);
        let span = &text.lines[0].spans[0];
        assert_eq!(span.style.fg, Some(theme.heading));
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn renders_lists_with_markers() {
        let lines = render_plain("- first\n- second");
        assert_eq!(lines[0], "• first");
        assert_eq!(lines[1], "• second");
    }

    #[test]
    fn renders_ordered_lists_with_numbers() {
        let lines = render_plain("1. one\n2. two");
        assert_eq!(lines[0], "1. one");
        assert_eq!(lines[1], "2. two");
    }

    #[test]
    fn code_blocks_keep_their_content() {
        let lines = render_plain("```javascript\nfunction sum() {}\n```");
        assert!(lines.iter().any(|l| l.contains("function sum() {}")));
    }

    #[test]
    fn inline_code_uses_code_color() {
        let theme = Theme::dark();
        let mut highlighter = CodeHighlighter::new();
        let text = render("use `map` here", &theme, &mut highlighter);
        let code_span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content.as_ref() == "map")
            .expect("inline code span");
        assert_eq!(code_span.style.fg, Some(theme.code));
    }

    #[test]
    fn rendering_is_pure() {
        let first = render_plain("# A\n\nsome *emphasis* and **bold**\n\n- item");
        let second = render_plain("# A\n\nsome *emphasis* and **bold**\n\n- item");
        assert_eq!(first, second);
    }
}
