//! Actions module
//!
//! All state changes flow through actions dispatched into the store.
//! Actions are tagged by scope: global chrome events, and per-component
//! actions for the editor surface, language selector, review pipeline and
//! settings panel.

pub mod editor;
pub mod global;
pub mod language;
pub mod review;
pub mod settings;

pub use editor::EditorAction;
pub use global::GlobalAction;
pub use language::LanguageAction;
pub use review::ReviewAction;
pub use settings::SettingsAction;

/// Root action enum - tagged by component
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions (raw input, quit, tick)
    Global(GlobalAction),
    /// Editor surface actions (text edits, cursor movement)
    Editor(EditorAction),
    /// Language selector actions (dropdown open/close/select)
    Language(LanguageAction),
    /// Review request pipeline actions (submit and completions)
    Review(ReviewAction),
    /// Theme/settings chrome actions
    Settings(SettingsAction),
}
