//! Language selector reducer
//!
//! Owns the dropdown open/closed flag and the selection. Outside
//! interactions arrive as `CloseDropdown` (translated by the keyboard and
//! mouse middleware) and never touch the selection.

use crate::actions::{Action, LanguageAction};
use crate::state::LanguageSelectorState;

/// Reduce language selector state based on actions
pub fn reduce(mut state: LanguageSelectorState, action: &Action) -> LanguageSelectorState {
    let Action::Language(action) = action else {
        return state;
    };

    match action {
        LanguageAction::ToggleDropdown => {
            state.is_open = !state.is_open;
            if state.is_open {
                state.highlighted = state.selected_index();
            }
        }

        LanguageAction::CloseDropdown => {
            state.is_open = false;
        }

        LanguageAction::HighlightNext => {
            if state.is_open {
                let len = LanguageSelectorState::entries().len();
                state.highlighted = (state.highlighted + 1) % len;
            }
        }

        LanguageAction::HighlightPrevious => {
            if state.is_open {
                let len = LanguageSelectorState::entries().len();
                state.highlighted = (state.highlighted + len - 1) % len;
            }
        }

        LanguageAction::SelectHighlighted => {
            if state.is_open {
                let entries = LanguageSelectorState::entries();
                if let Some(lang) = entries.get(state.highlighted) {
                    state.selected = *lang;
                    log::info!("Language selected: {}", lang);
                }
                state.is_open = false;
            }
        }

        LanguageAction::Select(lang) => {
            state.selected = *lang;
            state.is_open = false;
            log::info!("Language selected: {}", lang);
        }
    }

    state
}
