//! Settings/theme reducer
//!
//! Owns the UI chrome: theme mode and the settings overlay. Outside clicks
//! arrive as `ClosePanel`, translated by the mouse middleware.

use crate::actions::{Action, SettingsAction};
use crate::state::{ChromeState, SettingsRow};

/// Reduce chrome state based on actions
pub fn reduce(mut state: ChromeState, action: &Action) -> ChromeState {
    let Action::Settings(action) = action else {
        return state;
    };

    match action {
        SettingsAction::TogglePanel => {
            state.settings_open = !state.settings_open;
            if state.settings_open {
                state.settings_focus = SettingsRow::Theme;
            }
        }

        SettingsAction::ClosePanel => state.settings_open = false,

        SettingsAction::ToggleTheme => {
            state.theme_mode = state.theme_mode.toggled();
            log::info!("Theme switched to {}", state.theme_mode.label());
        }

        SettingsAction::FocusNext => {
            if state.settings_open {
                state.settings_focus = state.settings_focus.next();
            }
        }

        SettingsAction::FocusPrevious => {
            if state.settings_open {
                state.settings_focus = state.settings_focus.previous();
            }
        }

        SettingsAction::CycleValue(_direction) => {
            // The language row is resolved by the root reducer; the theme
            // row has only two values, so any direction flips it.
            if state.settings_open && state.settings_focus == SettingsRow::Theme {
                state.theme_mode = state.theme_mode.toggled();
                log::info!("Theme switched to {}", state.theme_mode.label());
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::settings::CycleDirection;
    use review_theme::ThemeMode;

    #[test]
    fn theme_toggles_both_ways() {
        let state = reduce(
            ChromeState::default(),
            &Action::Settings(SettingsAction::ToggleTheme),
        );
        assert_eq!(state.theme_mode, ThemeMode::Light);
        let state = reduce(state, &Action::Settings(SettingsAction::ToggleTheme));
        assert_eq!(state.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn opening_the_panel_resets_focus() {
        let mut state = ChromeState::default();
        state.settings_focus = SettingsRow::Language;
        let state = reduce(state, &Action::Settings(SettingsAction::TogglePanel));
        assert!(state.settings_open);
        assert_eq!(state.settings_focus, SettingsRow::Theme);
    }

    #[test]
    fn cycling_the_theme_row_flips_the_theme() {
        let mut state = ChromeState::default();
        state.settings_open = true;
        let state = reduce(
            state,
            &Action::Settings(SettingsAction::CycleValue(CycleDirection::Forward)),
        );
        assert_eq!(state.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn focus_moves_between_the_two_rows() {
        let mut state = ChromeState::default();
        state.settings_open = true;
        let state = reduce(state, &Action::Settings(SettingsAction::FocusNext));
        assert_eq!(state.settings_focus, SettingsRow::Language);
        let state = reduce(state, &Action::Settings(SettingsAction::FocusNext));
        assert_eq!(state.settings_focus, SettingsRow::Theme);
    }

    #[test]
    fn close_panel_leaves_the_theme_alone() {
        let mut state = ChromeState::default();
        state.settings_open = true;
        state.theme_mode = ThemeMode::Light;
        let state = reduce(state, &Action::Settings(SettingsAction::ClosePanel));
        assert!(!state.settings_open);
        assert_eq!(state.theme_mode, ThemeMode::Light);
    }
}
