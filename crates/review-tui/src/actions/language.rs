//! Language selector actions.

use crate::domain_models::Language;

/// Actions for the language dropdown
#[derive(Debug, Clone)]
pub enum LanguageAction {
    /// Open/close the dropdown
    ToggleDropdown,
    /// Force-close without changing the selection (outside interaction)
    CloseDropdown,
    /// Move the dropdown cursor down
    HighlightNext,
    /// Move the dropdown cursor up
    HighlightPrevious,
    /// Select the highlighted entry and close
    SelectHighlighted,
    /// Select a specific language and close (settings panel, mouse)
    Select(Language),
}
