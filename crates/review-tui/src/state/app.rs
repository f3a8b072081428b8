//! Application state.

use super::{ChromeState, EditorState, LanguageSelectorState, ReviewState};
use crate::domain_models::Language;
use review_config::AppConfig;
use review_theme::ThemeMode;

/// Root application state: one cell per component plus the run flag.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub running: bool,
    pub editor: EditorState,
    pub language: LanguageSelectorState,
    pub review: ReviewState,
    pub chrome: ChromeState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }

    /// Build initial state from the loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let theme_mode = match config.theme.to_lowercase().as_str() {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        };
        Self {
            running: true,
            editor: EditorState::default(),
            language: LanguageSelectorState::with_selected(Language::from_id(&config.language)),
            review: ReviewState::default(),
            chrome: ChromeState::with_theme(theme_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::RequestState;

    #[test]
    fn initial_state_matches_the_spec() {
        let state = AppState::from_config(&AppConfig::default());
        assert!(state.running);
        assert_eq!(state.review.request, RequestState::Idle);
        assert_eq!(state.language.selected, Language::Javascript);
        assert!(!state.language.is_open);
        assert!(!state.chrome.settings_open);
        assert_eq!(state.chrome.theme_mode, ThemeMode::Dark);
        assert!(!state.editor.code().is_empty());
    }

    #[test]
    fn config_preselects_language_and_theme() {
        let config = AppConfig {
            language: "python".into(),
            theme: "light".into(),
            ..AppConfig::default()
        };
        let state = AppState::from_config(&config);
        assert_eq!(state.language.selected, Language::Python);
        assert_eq!(state.chrome.theme_mode, ThemeMode::Light);
    }
}
