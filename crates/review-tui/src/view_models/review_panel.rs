//! Review panel view model
//!
//! Maps the request lifecycle onto the four faces of the review pane:
//! empty placeholder, loading indicator, error banner, or success banner
//! plus the review body.

use crate::domain_models::RequestState;
use crate::state::AppState;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the review pane shows for the current request state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewPanelViewModel {
    /// Idle with no prior terminal state
    Empty {
        title: &'static str,
        hint: &'static str,
    },
    /// A request is in flight
    Loading {
        spinner: &'static str,
        message: &'static str,
    },
    /// The request failed; `message` is the generic user-facing text
    Error { message: String },
    /// A review arrived; `body` is markdown to be rendered
    Success { banner: &'static str, body: String },
}

impl ReviewPanelViewModel {
    pub fn from_state(state: &AppState) -> Self {
        match &state.review.request {
            RequestState::Idle => Self::Empty {
                title: "No review yet",
                hint: "Submit your code to receive a detailed review",
            },
            RequestState::Loading => Self::Loading {
                spinner: SPINNER_FRAMES[state.review.spinner_frame % SPINNER_FRAMES.len()],
                message: "Analyzing your code...",
            },
            RequestState::Error(message) => Self::Error {
                message: message.clone(),
            },
            RequestState::Success(body) => Self::Success {
                banner: "Code review completed successfully!",
                body: body.clone(),
            },
        }
    }

    /// Badge shown in the pane title.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Self::Loading { .. } => Some(" Analyzing "),
            Self::Success { .. } => Some(" Completed "),
            Self::Error { .. } => Some(" Failed "),
            Self::Empty { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_shows_the_placeholder() {
        let vm = ReviewPanelViewModel::from_state(&AppState::new());
        assert!(matches!(vm, ReviewPanelViewModel::Empty { .. }));
        assert_eq!(vm.badge(), None);
    }

    #[test]
    fn loading_picks_a_spinner_frame() {
        let mut state = AppState::new();
        state.review.request = RequestState::Loading;
        state.review.spinner_frame = SPINNER_FRAMES.len() + 1;
        let vm = ReviewPanelViewModel::from_state(&state);
        assert_eq!(
            vm,
            ReviewPanelViewModel::Loading {
                spinner: SPINNER_FRAMES[1],
                message: "Analyzing your code...",
            }
        );
    }

    #[test]
    fn error_carries_only_the_stored_message() {
        let mut state = AppState::new();
        state.review.request = RequestState::Error("Failed to get code review.".into());
        let vm = ReviewPanelViewModel::from_state(&state);
        assert_eq!(
            vm,
            ReviewPanelViewModel::Error {
                message: "Failed to get code review.".into()
            }
        );
        assert_eq!(vm.badge(), Some(" Failed "));
    }
}
