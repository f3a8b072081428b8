//! Review request pipeline actions.
//!
//! `Submit` is dispatched by user intent; `Completed`/`Failed` are
//! dispatched by the review middleware when the network call resolves.

/// Actions for the review request pipeline
#[derive(Debug, Clone)]
pub enum ReviewAction {
    /// Submit the current editor buffer for review.
    /// Ignored while a request is already in flight (single-flight).
    Submit,
    /// The endpoint answered successfully with the review body
    Completed(String),
    /// The request failed; carries the user-facing message, never the
    /// transport detail
    Failed(String),

    // Review pane scrolling
    ScrollUp(u16),
    ScrollDown(u16),
}
