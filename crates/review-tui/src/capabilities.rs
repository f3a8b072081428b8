//! Input capability system
//!
//! Describes what the focused surface accepts, so the keyboard middleware
//! can route keys without hardcoding overlay checks everywhere. Exactly one
//! surface has focus at a time: an open overlay wins over the editor.

use crate::state::AppState;
use bitflags::bitflags;

bitflags! {
    /// Capabilities of the currently focused surface
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InputCapabilities: u32 {
        /// Plain characters go into the editor buffer
        const TEXT_INPUT = 1 << 0;
        /// Up/Down/Enter drive the language dropdown
        const DROPDOWN_NAV = 1 << 1;
        /// Up/Down/Left/Right drive the settings panel
        const SETTINGS_NAV = 1 << 2;
        /// PageUp/PageDown scroll the review pane
        const REVIEW_SCROLL = 1 << 3;
    }
}

impl InputCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }
}

/// Capabilities of whatever currently has focus
pub fn capabilities(state: &AppState) -> InputCapabilities {
    if state.language.is_open {
        InputCapabilities::DROPDOWN_NAV
    } else if state.chrome.settings_open {
        InputCapabilities::SETTINGS_NAV
    } else {
        InputCapabilities::TEXT_INPUT | InputCapabilities::REVIEW_SCROLL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_has_focus_by_default() {
        let caps = capabilities(&AppState::new());
        assert!(caps.accepts_text_input());
        assert!(caps.contains(InputCapabilities::REVIEW_SCROLL));
    }

    #[test]
    fn open_dropdown_takes_focus() {
        let mut state = AppState::new();
        state.language.is_open = true;
        let caps = capabilities(&state);
        assert_eq!(caps, InputCapabilities::DROPDOWN_NAV);
        assert!(!caps.accepts_text_input());
    }

    #[test]
    fn dropdown_wins_over_settings() {
        let mut state = AppState::new();
        state.language.is_open = true;
        state.chrome.settings_open = true;
        assert_eq!(capabilities(&state), InputCapabilities::DROPDOWN_NAV);
    }
}
