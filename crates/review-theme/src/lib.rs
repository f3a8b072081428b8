//! Theme palettes for review-tui.
//!
//! Centralized color and style management. Views never hard-code colors;
//! they pull styles from the active [`Theme`], which is swapped wholesale
//! when the user toggles between dark and light mode.

use ratatui::prelude::*;
use ratatui::style::palette::tailwind;

/// Which of the two built-in palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }
}

/// Application theme - one field per color role.
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_overlay: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_info: Color,
    pub status_loading: Color,

    // Selection colors (dropdown rows, settings options)
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Markdown heading accent
    pub heading: Color,
    // Inline/fenced code fallback color (when syntect has no grammar)
    pub code: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,
            bg_overlay: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_info: tailwind::BLUE.c400,
            status_loading: tailwind::YELLOW.c400,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            heading: tailwind::AMBER.c300,
            code: tailwind::EMERALD.c300,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c100,
            bg_panel: tailwind::SLATE.c200,
            bg_overlay: tailwind::SLATE.c300,

            text_primary: tailwind::SLATE.c900,
            text_secondary: tailwind::SLATE.c700,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::CYAN.c700,
            accent_secondary: tailwind::CYAN.c500,

            status_success: tailwind::GREEN.c600,
            status_error: tailwind::RED.c600,
            status_info: tailwind::BLUE.c600,
            status_loading: tailwind::YELLOW.c600,

            selected_bg: tailwind::BLUE.c600,
            selected_fg: Color::White,

            heading: tailwind::AMBER.c700,
            code: tailwind::EMERALD.c700,
        }
    }

    /// The syntect theme name that matches this palette.
    pub fn syntect_theme_name(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Dark => "base16-ocean.dark",
            ThemeMode::Light => "InspiredGitHub",
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "^R" in "^R Review")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for selected dropdown/settings rows
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the in-flight indicator
    pub fn loading(&self) -> Style {
        Style::default()
            .fg(self.status_loading)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_mode_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn palettes_differ_between_modes() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_ne!(dark.bg_primary, light.bg_primary);
        assert_ne!(dark.text_primary, light.text_primary);
    }
}
