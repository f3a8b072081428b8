//! KeyboardMiddleware - translates raw key events into component actions
//!
//! Routing happens in layers:
//!
//! 1. Priority keys that always work (Ctrl+C / Ctrl+Q quit).
//! 2. An open language dropdown owns the keyboard: navigation keys drive
//!    it, anything else counts as an outside interaction and closes it
//!    without changing the selection (chrome shortcuts still fire after
//!    the close).
//! 3. Chrome shortcuts: submit, dropdown, theme, settings.
//! 4. Capability-based routing: settings-panel navigation, or plain text
//!    input into the editor plus review-pane scrolling.

use crate::actions::{
    settings::CycleDirection, Action, EditorAction, GlobalAction, LanguageAction, ReviewAction,
    SettingsAction,
};
use crate::capabilities::{capabilities, InputCapabilities};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lines scrolled by PageUp/PageDown in the review pane.
const REVIEW_PAGE: u16 = 10;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let caps = capabilities(state);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Layer 1: quit always works
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        // Layer 2: an open dropdown owns the keyboard
        if caps.contains(InputCapabilities::DROPDOWN_NAV) {
            match key.code {
                KeyCode::Up => dispatcher.dispatch(Action::Language(LanguageAction::HighlightPrevious)),
                KeyCode::Down => dispatcher.dispatch(Action::Language(LanguageAction::HighlightNext)),
                KeyCode::Enter => {
                    dispatcher.dispatch(Action::Language(LanguageAction::SelectHighlighted))
                }
                KeyCode::Esc => dispatcher.dispatch(Action::Language(LanguageAction::CloseDropdown)),
                _ => {
                    // Outside interaction: close without changing the
                    // selection; chrome shortcuts still apply afterwards
                    dispatcher.dispatch(Action::Language(LanguageAction::CloseDropdown));
                    self.route_chrome(key, dispatcher);
                }
            }
            return;
        }

        // Layer 3: chrome shortcuts
        if self.route_chrome(key, dispatcher) {
            return;
        }

        // Layer 4: capability-based routing
        if caps.contains(InputCapabilities::SETTINGS_NAV) {
            match key.code {
                KeyCode::Esc => dispatcher.dispatch(Action::Settings(SettingsAction::ClosePanel)),
                KeyCode::Up => dispatcher.dispatch(Action::Settings(SettingsAction::FocusPrevious)),
                KeyCode::Down => dispatcher.dispatch(Action::Settings(SettingsAction::FocusNext)),
                KeyCode::Left => dispatcher.dispatch(Action::Settings(SettingsAction::CycleValue(
                    CycleDirection::Backward,
                ))),
                KeyCode::Right | KeyCode::Enter => dispatcher.dispatch(Action::Settings(
                    SettingsAction::CycleValue(CycleDirection::Forward),
                )),
                _ => {}
            }
            return;
        }

        if caps.accepts_text_input() {
            match key.code {
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    dispatcher.dispatch(Action::Editor(EditorAction::Char(c)))
                }
                KeyCode::Backspace => dispatcher.dispatch(Action::Editor(EditorAction::Backspace)),
                KeyCode::Enter => dispatcher.dispatch(Action::Editor(EditorAction::Newline)),
                KeyCode::Tab => dispatcher.dispatch(Action::Editor(EditorAction::Tab)),
                KeyCode::Left => dispatcher.dispatch(Action::Editor(EditorAction::CursorLeft)),
                KeyCode::Right => dispatcher.dispatch(Action::Editor(EditorAction::CursorRight)),
                KeyCode::Up => dispatcher.dispatch(Action::Editor(EditorAction::CursorUp)),
                KeyCode::Down => dispatcher.dispatch(Action::Editor(EditorAction::CursorDown)),
                KeyCode::Home => dispatcher.dispatch(Action::Editor(EditorAction::CursorLineStart)),
                KeyCode::End => dispatcher.dispatch(Action::Editor(EditorAction::CursorLineEnd)),
                KeyCode::PageUp => {
                    dispatcher.dispatch(Action::Review(ReviewAction::ScrollUp(REVIEW_PAGE)))
                }
                KeyCode::PageDown => {
                    dispatcher.dispatch(Action::Review(ReviewAction::ScrollDown(REVIEW_PAGE)))
                }
                _ => {}
            }
        }
    }

    /// Chrome shortcuts available from any surface. Returns true if the key
    /// was one of them.
    fn route_chrome(&self, key: KeyEvent, dispatcher: &Dispatcher) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('r') => {
                dispatcher.dispatch(Action::Review(ReviewAction::Submit));
                true
            }
            KeyCode::Char('l') => {
                dispatcher.dispatch(Action::Language(LanguageAction::ToggleDropdown));
                true
            }
            KeyCode::Char('t') => {
                dispatcher.dispatch(Action::Settings(SettingsAction::ToggleTheme));
                true
            }
            KeyCode::Char('s') => {
                dispatcher.dispatch(Action::Settings(SettingsAction::TogglePanel));
                true
            }
            _ => false,
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false; // raw key events never reach the reducer
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        )))
    }

    fn ctrl_key(c: char) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn translate(state: &AppState, action: Action) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut mw = KeyboardMiddleware::new();
        let passed = mw.handle(&action, state, &dispatcher);
        assert!(!passed, "key events are always consumed");
        rx.try_iter().collect()
    }

    #[test]
    fn chars_flow_into_the_editor() {
        let out = translate(&AppState::new(), key(KeyCode::Char('x')));
        assert!(matches!(
            out.as_slice(),
            [Action::Editor(EditorAction::Char('x'))]
        ));
    }

    #[test]
    fn ctrl_r_submits() {
        let out = translate(&AppState::new(), ctrl_key('r'));
        assert!(matches!(out.as_slice(), [Action::Review(ReviewAction::Submit)]));
    }

    #[test]
    fn unrelated_key_closes_open_dropdown() {
        let mut state = AppState::new();
        state.language.is_open = true;
        let out = translate(&state, key(KeyCode::Char('x')));
        assert!(matches!(
            out.as_slice(),
            [Action::Language(LanguageAction::CloseDropdown)]
        ));
    }

    #[test]
    fn enter_selects_highlighted_language() {
        let mut state = AppState::new();
        state.language.is_open = true;
        let out = translate(&state, key(KeyCode::Enter));
        assert!(matches!(
            out.as_slice(),
            [Action::Language(LanguageAction::SelectHighlighted)]
        ));
    }

    #[test]
    fn ctrl_c_quits_from_any_surface() {
        let mut state = AppState::new();
        state.chrome.settings_open = true;
        let out = translate(&state, ctrl_key('c'));
        assert!(matches!(out.as_slice(), [Action::Global(GlobalAction::Quit)]));
    }
}
