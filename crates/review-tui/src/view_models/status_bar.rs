//! Status bar view model
//!
//! Pre-computes the key hints and the request status shown at the bottom.

use crate::domain_models::RequestState;
use crate::state::AppState;

/// View model for rendering the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarViewModel {
    /// Key hints, left-aligned: (key, description)
    pub hints: Vec<(&'static str, &'static str)>,
    /// Request status summary, right-aligned
    pub status: String,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let hints = vec![
            ("^R", "Review"),
            ("^L", "Language"),
            ("^T", "Theme"),
            ("^S", "Settings"),
            ("^Q", "Quit"),
        ];

        let status = match &state.review.request {
            RequestState::Idle => "Ready".to_string(),
            RequestState::Loading => "Reviewing…".to_string(),
            RequestState::Success(_) => match state.review.completed_at {
                Some(at) => format!("Review received {}", at.format("%H:%M:%S")),
                None => "Review received".to_string(),
            },
            RequestState::Error(_) => "Review failed".to_string(),
        };

        Self { hints, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_reads_ready() {
        let vm = StatusBarViewModel::from_state(&AppState::new());
        assert_eq!(vm.status, "Ready");
        assert!(vm.hints.iter().any(|(k, _)| *k == "^R"));
    }

    #[test]
    fn loading_state_reads_reviewing() {
        let mut state = AppState::new();
        state.review.request = RequestState::Loading;
        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.status, "Reviewing…");
    }
}
