//! Editor surface state.

/// Default buffer shown on startup, matching the sample review targets are
/// usually pasted over.
const DEFAULT_CODE: &str = " function sum() {\n  return 1 + 1\n}";

/// The code editor: line buffer plus cursor.
///
/// The buffer is owned exclusively by this cell; it is mutated on every
/// edit and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// Buffer content, one entry per line (no trailing newlines stored)
    pub lines: Vec<String>,
    /// Cursor line index into `lines`
    pub cursor_line: usize,
    /// Cursor column as a character offset into the cursor line
    pub cursor_col: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::with_code(DEFAULT_CODE)
    }
}

impl EditorState {
    pub fn with_code(code: &str) -> Self {
        let lines: Vec<String> = if code.is_empty() {
            vec![String::new()]
        } else {
            code.split('\n').map(str::to_string).collect()
        };
        Self {
            lines,
            cursor_line: 0,
            cursor_col: 0,
        }
    }

    /// The full buffer as submitted to the review endpoint.
    pub fn code(&self) -> String {
        self.lines.join("\n")
    }

    /// Character length of the cursor line.
    pub fn cursor_line_len(&self) -> usize {
        self.lines
            .get(self.cursor_line)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_buffer_is_the_sample() {
        let editor = EditorState::default();
        assert_eq!(editor.code(), " function sum() {\n  return 1 + 1\n}");
        assert_eq!(editor.lines.len(), 3);
    }

    #[test]
    fn empty_code_still_has_one_line() {
        let editor = EditorState::with_code("");
        assert_eq!(editor.lines, vec![String::new()]);
        assert_eq!(editor.code(), "");
    }
}
