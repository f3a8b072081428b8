//! MouseMiddleware - translates clicks into component actions
//!
//! Hit-tests the click position against the geometry in [`crate::layout`]
//! and dispatches semantic actions. This is where outside interactions are
//! detected: a click beyond an open overlay closes it without changing any
//! selection.

use crate::actions::{Action, GlobalAction, LanguageAction, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::layout;
use crate::middleware::Middleware;
use crate::state::{AppState, LanguageSelectorState};
use ratatui::layout::Rect;

pub struct MouseMiddleware;

impl MouseMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_click(&self, x: u16, y: u16, frame: Rect, state: &AppState, dispatcher: &Dispatcher) {
        if state.language.is_open {
            if let Some(row) = layout::dropdown_entry_at(frame, x, y) {
                let lang = LanguageSelectorState::entries()[row];
                dispatcher.dispatch(Action::Language(LanguageAction::Select(lang)));
            } else if !layout::contains(layout::language_dropdown(frame), x, y) {
                // Outside interaction: close, keep the selection
                dispatcher.dispatch(Action::Language(LanguageAction::CloseDropdown));
            }
        } else if layout::contains(layout::language_indicator(frame), x, y) {
            dispatcher.dispatch(Action::Language(LanguageAction::ToggleDropdown));
        }

        if state.chrome.settings_open && !layout::contains(layout::settings_panel(frame), x, y) {
            dispatcher.dispatch(Action::Settings(SettingsAction::ClosePanel));
        }
    }
}

impl Default for MouseMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for MouseMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::MouseClick { x, y, frame }) = action {
            self.handle_click(*x, *y, *frame, state, dispatcher);
            return false; // raw clicks never reach the reducer
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Language;
    use std::sync::mpsc;

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    fn click(state: &AppState, x: u16, y: u16) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut mw = MouseMiddleware::new();
        let passed = mw.handle(
            &Action::Global(GlobalAction::MouseClick { x, y, frame: FRAME }),
            state,
            &dispatcher,
        );
        assert!(!passed, "clicks are always consumed");
        rx.try_iter().collect()
    }

    fn open_dropdown_state() -> AppState {
        let mut state = AppState::new();
        state.language.is_open = true;
        state
    }

    #[test]
    fn outside_click_closes_an_open_dropdown() {
        let out = click(&open_dropdown_state(), 0, 20);
        assert!(matches!(
            out.as_slice(),
            [Action::Language(LanguageAction::CloseDropdown)]
        ));
    }

    #[test]
    fn outside_click_with_everything_closed_does_nothing() {
        let out = click(&AppState::new(), 0, 20);
        assert!(out.is_empty());
    }

    #[test]
    fn clicking_a_dropdown_entry_selects_it() {
        let dropdown = layout::language_dropdown(FRAME);
        // Second row inside the border
        let out = click(&open_dropdown_state(), dropdown.x + 2, dropdown.y + 2);
        assert!(matches!(
            out.as_slice(),
            [Action::Language(LanguageAction::Select(Language::Typescript))]
        ));
    }

    #[test]
    fn clicking_the_indicator_toggles_the_dropdown() {
        let indicator = layout::language_indicator(FRAME);
        let out = click(&AppState::new(), indicator.x + 1, indicator.y);
        assert!(matches!(
            out.as_slice(),
            [Action::Language(LanguageAction::ToggleDropdown)]
        ));
    }

    #[test]
    fn click_outside_the_settings_panel_closes_it() {
        let mut state = AppState::new();
        state.chrome.settings_open = true;
        let out = click(&state, 0, 0);
        assert!(matches!(
            out.as_slice(),
            [Action::Settings(SettingsAction::ClosePanel)]
        ));
    }

    #[test]
    fn click_inside_the_settings_panel_keeps_it_open() {
        let mut state = AppState::new();
        state.chrome.settings_open = true;
        let panel = layout::settings_panel(FRAME);
        let out = click(&state, panel.x + 1, panel.y + 1);
        assert!(out.is_empty());
    }
}
