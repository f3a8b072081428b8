//! Review pipeline reducer
//!
//! Drives the request lifecycle:
//! `Idle -> Loading -> {Success | Error} -> Loading -> ...`
//!
//! A new submission clears the previous terminal state; a submission while
//! Loading leaves the state untouched (the middleware already refused to
//! issue a second request).

use crate::actions::{Action, GlobalAction, ReviewAction};
use crate::domain_models::RequestState;
use crate::state::ReviewState;

/// Reduce review pipeline state based on actions
pub fn reduce(mut state: ReviewState, action: &Action) -> ReviewState {
    match action {
        Action::Review(action) => match action {
            ReviewAction::Submit => {
                if state.request.is_loading() {
                    // Single-flight: no transition from Loading on submit
                    return state;
                }
                state.request = RequestState::Loading;
                state.scroll = 0;
                state.spinner_frame = 0;
                log::debug!("Review request started");
            }

            ReviewAction::Completed(review) => {
                state.request = RequestState::Success(review.clone());
                state.completed_at = Some(chrono::Local::now());
                state.scroll = 0;
                log::info!("Review completed ({} bytes)", review.len());
            }

            ReviewAction::Failed(message) => {
                state.request = RequestState::Error(message.clone());
                state.scroll = 0;
                log::warn!("Review failed: {}", message);
            }

            ReviewAction::ScrollUp(lines) => {
                state.scroll = state.scroll.saturating_sub(*lines);
            }

            ReviewAction::ScrollDown(lines) => {
                state.scroll = state.scroll.saturating_add(*lines);
            }
        },

        Action::Global(GlobalAction::Tick) => {
            if state.request.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
        }

        _ => {}
    }

    state
}
