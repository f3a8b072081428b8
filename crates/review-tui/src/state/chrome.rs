//! Cross-cutting UI chrome: theme and settings panel.
//!
//! Purely presentational; nothing here has a network effect, and nothing
//! is persisted across sessions.

use review_theme::ThemeMode;

/// Rows of the settings panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsRow {
    #[default]
    Theme,
    Language,
}

impl SettingsRow {
    pub fn next(self) -> Self {
        match self {
            SettingsRow::Theme => SettingsRow::Language,
            SettingsRow::Language => SettingsRow::Theme,
        }
    }

    pub fn previous(self) -> Self {
        // Two rows, so previous == next
        self.next()
    }
}

/// Theme and settings panel state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChromeState {
    pub theme_mode: ThemeMode,
    pub settings_open: bool,
    pub settings_focus: SettingsRow,
}

impl ChromeState {
    pub fn with_theme(theme_mode: ThemeMode) -> Self {
        Self {
            theme_mode,
            ..Self::default()
        }
    }
}
