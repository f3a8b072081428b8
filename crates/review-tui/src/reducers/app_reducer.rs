//! Root reducer.

use crate::actions::{settings::CycleDirection, Action, GlobalAction, SettingsAction};
use crate::reducers::{editor_reducer, language_reducer, review_reducer, settings_reducer};
use crate::state::{AppState, LanguageSelectorState, SettingsRow};

/// Produce the next application state for an action.
///
/// Cross-cutting actions (quit, settings-driven language change) are handled
/// here; everything else is delegated to the per-cell reducers.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }

        // The settings panel's language row mutates the selector cell, which
        // the settings reducer cannot reach; resolve it here.
        Action::Settings(SettingsAction::CycleValue(direction))
            if state.chrome.settings_open && state.chrome.settings_focus == SettingsRow::Language =>
        {
            let entries = LanguageSelectorState::entries();
            let idx = state.language.selected_index();
            let next = match direction {
                CycleDirection::Forward => (idx + 1) % entries.len(),
                CycleDirection::Backward => (idx + entries.len() - 1) % entries.len(),
            };
            state.language.selected = entries[next];
            log::debug!("Settings: language set to {}", state.language.selected);
            return state;
        }

        _ => {}
    }

    state.editor = editor_reducer::reduce(state.editor, action);
    state.language = language_reducer::reduce(state.language, action);
    state.review = review_reducer::reduce(state.review, action);
    state.chrome = settings_reducer::reduce(state.chrome, action);

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Language;

    #[test]
    fn quit_stops_the_app() {
        let state = reduce(AppState::new(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn settings_language_row_cycles_the_selection() {
        let mut state = AppState::new();
        state.chrome.settings_open = true;
        state.chrome.settings_focus = SettingsRow::Language;
        assert_eq!(state.language.selected, Language::Javascript);

        let state = reduce(
            state,
            &Action::Settings(SettingsAction::CycleValue(CycleDirection::Forward)),
        );
        assert_eq!(state.language.selected, Language::Typescript);

        let state = reduce(
            state,
            &Action::Settings(SettingsAction::CycleValue(CycleDirection::Backward)),
        );
        assert_eq!(state.language.selected, Language::Javascript);
    }
}
