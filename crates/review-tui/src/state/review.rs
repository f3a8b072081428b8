//! Review request pipeline state.

use crate::domain_models::RequestState;
use chrono::{DateTime, Local};

/// State of the review pane: request lifecycle plus display bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewState {
    /// The request lifecycle; exactly one variant at a time
    pub request: RequestState,
    /// Vertical scroll offset of the rendered review
    pub scroll: u16,
    /// Spinner frame advanced by ticks while loading
    pub spinner_frame: usize,
    /// When the last review arrived (shown in the status bar)
    pub completed_at: Option<DateTime<Local>>,
}
