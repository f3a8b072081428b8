//! Reducers - pure functions producing new state from state + action.
//!
//! The root reducer handles cross-cutting actions, then delegates to one
//! reducer per state cell.

pub mod app_reducer;
pub mod editor_reducer;
pub mod language_reducer;
pub mod review_reducer;
pub mod settings_reducer;
