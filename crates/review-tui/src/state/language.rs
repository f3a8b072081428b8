//! Language selector state.

use crate::domain_models::Language;
use strum::IntoEnumIterator;

/// The language dropdown: open flag, current selection, dropdown cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSelectorState {
    /// Whether the dropdown overlay is shown
    pub is_open: bool,
    /// Current selection; read by the editor (grammar) and header (label)
    pub selected: Language,
    /// Index of the highlighted dropdown row
    pub highlighted: usize,
}

impl Default for LanguageSelectorState {
    fn default() -> Self {
        Self {
            is_open: false,
            selected: Language::default(),
            highlighted: 0,
        }
    }
}

impl LanguageSelectorState {
    pub fn with_selected(selected: Language) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    /// All selectable languages, in dropdown order.
    pub fn entries() -> Vec<Language> {
        Language::iter().collect()
    }

    /// Position of the current selection within [`Self::entries`].
    pub fn selected_index(&self) -> usize {
        Self::entries()
            .iter()
            .position(|l| *l == self.selected)
            .unwrap_or(0)
    }
}
