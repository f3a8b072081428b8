//! View models - pure projections from state to presentation data.
//!
//! Keeping these out of the render functions makes the display logic
//! testable without a terminal.

pub mod review_panel;
pub mod status_bar;

pub use review_panel::ReviewPanelViewModel;
pub use status_bar::StatusBarViewModel;
