//! Syntax highlighter using syntect.
//!
//! The highlighter is keyed by language token ("javascript", "python", ...)
//! rather than file path: the editor has no file, only a buffer and a
//! user-selected language. Tokens without a registered grammar fall back to
//! the JavaScript grammar, then to plain text.

use ratatui::style::{Color, Modifier, Style as UiStyle};
use ratatui::text::{Line, Span};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Handles syntax highlighting for editor and review code blocks.
pub struct CodeHighlighter {
    /// Syntax definitions.
    syntax_set: SyntaxSet,
    /// Current theme.
    theme: Theme,
    /// Cache of highlighted lines by (token, line) hash.
    cache: HashMap<u64, Vec<Span<'static>>>,
    /// Maximum cache size.
    max_cache_size: usize,
    /// Cache of syntax references by language token.
    syntax_cache: HashMap<String, usize>,
}

impl std::fmt::Debug for CodeHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeHighlighter")
            .field("cache_size", &self.cache.len())
            .field("max_cache_size", &self.max_cache_size)
            .finish()
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter {
    /// Create a new highlighter with the default (dark) theme.
    pub fn new() -> Self {
        Self::with_theme_name(DEFAULT_THEME)
    }

    /// Create a highlighter with a specific syntect theme name.
    pub fn with_theme_name(theme_name: &str) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();
        let theme = theme_set
            .themes
            .get(theme_name)
            .cloned()
            .unwrap_or_else(|| theme_set.themes[DEFAULT_THEME].clone());

        Self {
            syntax_set,
            theme,
            cache: HashMap::new(),
            max_cache_size: 2000,
            syntax_cache: HashMap::new(),
        }
    }

    /// Swap the theme, invalidating cached highlights.
    pub fn set_theme_name(&mut self, theme_name: &str) {
        let theme_set = ThemeSet::load_defaults();
        if let Some(theme) = theme_set.themes.get(theme_name) {
            self.theme = theme.clone();
            self.cache.clear();
        }
    }

    /// Highlight a full buffer, one styled `Line` per input line.
    ///
    /// Trailing newlines do not produce a phantom last line.
    pub fn highlight(&mut self, code: &str, lang_token: &str) -> Vec<Line<'static>> {
        code.lines()
            .map(|line| Line::from(self.highlight_line(lang_token, line)))
            .collect()
    }

    /// Highlight a single line, returning styled spans.
    ///
    /// Results are cached; the output is a pure function of
    /// (lang_token, content).
    pub fn highlight_line(&mut self, lang_token: &str, content: &str) -> Vec<Span<'static>> {
        let key = cache_key(lang_token, content);
        if let Some(spans) = self.cache.get(&key) {
            return spans.clone();
        }

        let syntax_idx = self.get_syntax_index(lang_token);
        let syntax = self
            .syntax_set
            .syntaxes()
            .get(syntax_idx)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let spans = self.highlight_with_syntax(syntax, content);

        if self.cache.len() >= self.max_cache_size {
            let to_remove = self.max_cache_size / 5;
            let keys_to_remove: Vec<_> = self.cache.keys().take(to_remove).copied().collect();
            for key in keys_to_remove {
                self.cache.remove(&key);
            }
        }
        self.cache.insert(key, spans.clone());

        spans
    }

    /// Get syntax index for a language token (cached).
    fn get_syntax_index(&mut self, lang_token: &str) -> usize {
        let token = lang_token.to_lowercase();

        if let Some(&idx) = self.syntax_cache.get(&token) {
            return idx;
        }

        // Unknown tokens fall back to the JavaScript grammar, then plain text
        let syntax = self
            .syntax_set
            .find_syntax_by_token(&token)
            .or_else(|| self.syntax_set.find_syntax_by_token("js"))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let idx = self
            .syntax_set
            .syntaxes()
            .iter()
            .position(|s| s.name == syntax.name)
            .unwrap_or(0);

        self.syntax_cache.insert(token, idx);
        idx
    }

    /// Highlight content with a specific syntax.
    fn highlight_with_syntax(
        &self,
        syntax: &syntect::parsing::SyntaxReference,
        content: &str,
    ) -> Vec<Span<'static>> {
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        match highlighter.highlight_line(content, &self.syntax_set) {
            Ok(ranges) => ranges
                .iter()
                .map(|(style, text)| syntect_to_span(*style, text))
                .collect(),
            Err(_) => vec![Span::raw(content.to_string())],
        }
    }

    /// Clear the highlight cache.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Get current cache size.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn cache_key(lang_token: &str, content: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    lang_token.hash(&mut hasher);
    content.hash(&mut hasher);
    hasher.finish()
}

/// Convert a syntect style to a ratatui span.
fn syntect_to_span(style: Style, text: &str) -> Span<'static> {
    let mut ui_style = UiStyle::default().fg(Color::Rgb(
        style.foreground.r,
        style.foreground.g,
        style.foreground.b,
    ));
    if style.font_style.contains(FontStyle::BOLD) {
        ui_style = ui_style.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        ui_style = ui_style.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        ui_style = ui_style.add_modifier(Modifier::UNDERLINED);
    }
    Span::styled(text.to_string(), ui_style)
}
