//! Theme and settings panel actions.

/// Actions for the settings overlay and theme chrome
#[derive(Debug, Clone)]
pub enum SettingsAction {
    /// Open/close the settings panel
    TogglePanel,
    /// Close the settings panel (Esc, outside click)
    ClosePanel,
    /// Flip between dark and light theme
    ToggleTheme,
    /// Move focus to the next settings row
    FocusNext,
    /// Move focus to the previous settings row
    FocusPrevious,
    /// Cycle the focused row's value forward (Right) or backward (Left)
    CycleValue(CycleDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}
