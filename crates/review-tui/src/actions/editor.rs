//! Editor surface actions.
//!
//! Every edit replaces buffer content unconditionally - no validation and
//! no length limit.

/// Actions for the code editor surface
#[derive(Debug, Clone)]
pub enum EditorAction {
    /// Character typed at the cursor
    Char(char),
    /// Backspace at the cursor (joins lines at column 0)
    Backspace,
    /// Enter - split the current line at the cursor
    Newline,
    /// Tab - indent with spaces
    Tab,

    // Cursor movement
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
}
