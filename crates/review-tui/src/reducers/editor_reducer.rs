//! Editor reducer
//!
//! Applies edits to the line buffer. Edits replace content unconditionally;
//! there is no validation and no length limit.

use crate::actions::{Action, EditorAction};
use crate::state::EditorState;

/// Reduce editor state based on actions
pub fn reduce(mut state: EditorState, action: &Action) -> EditorState {
    let Action::Editor(action) = action else {
        return state;
    };

    match action {
        EditorAction::Char(c) => {
            let col = state.cursor_col;
            let line = &mut state.lines[state.cursor_line];
            let idx = byte_index(line, col);
            line.insert(idx, *c);
            state.cursor_col += 1;
        }

        EditorAction::Tab => {
            let col = state.cursor_col;
            let line = &mut state.lines[state.cursor_line];
            let idx = byte_index(line, col);
            line.insert_str(idx, "  ");
            state.cursor_col += 2;
        }

        EditorAction::Newline => {
            let col = state.cursor_col;
            let line = &mut state.lines[state.cursor_line];
            let idx = byte_index(line, col);
            let rest = line.split_off(idx);
            state.lines.insert(state.cursor_line + 1, rest);
            state.cursor_line += 1;
            state.cursor_col = 0;
        }

        EditorAction::Backspace => {
            if state.cursor_col > 0 {
                let col = state.cursor_col;
                let line = &mut state.lines[state.cursor_line];
                let idx = byte_index(line, col - 1);
                line.remove(idx);
                state.cursor_col -= 1;
            } else if state.cursor_line > 0 {
                // Join with the previous line
                let current = state.lines.remove(state.cursor_line);
                state.cursor_line -= 1;
                let prev = &mut state.lines[state.cursor_line];
                state.cursor_col = prev.chars().count();
                prev.push_str(&current);
            }
        }

        EditorAction::CursorLeft => {
            if state.cursor_col > 0 {
                state.cursor_col -= 1;
            } else if state.cursor_line > 0 {
                state.cursor_line -= 1;
                state.cursor_col = state.cursor_line_len();
            }
        }

        EditorAction::CursorRight => {
            if state.cursor_col < state.cursor_line_len() {
                state.cursor_col += 1;
            } else if state.cursor_line + 1 < state.lines.len() {
                state.cursor_line += 1;
                state.cursor_col = 0;
            }
        }

        EditorAction::CursorUp => {
            if state.cursor_line > 0 {
                state.cursor_line -= 1;
                state.cursor_col = state.cursor_col.min(state.cursor_line_len());
            }
        }

        EditorAction::CursorDown => {
            if state.cursor_line + 1 < state.lines.len() {
                state.cursor_line += 1;
                state.cursor_col = state.cursor_col.min(state.cursor_line_len());
            }
        }

        EditorAction::CursorLineStart => state.cursor_col = 0,
        EditorAction::CursorLineEnd => state.cursor_col = state.cursor_line_len(),
    }

    state
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn apply(state: EditorState, actions: &[EditorAction]) -> EditorState {
        actions.iter().fold(state, |state, action| {
            reduce(state, &Action::Editor(action.clone()))
        })
    }

    #[test]
    fn typing_inserts_at_the_cursor() {
        let state = apply(
            EditorState::with_code(""),
            &[
                EditorAction::Char('h'),
                EditorAction::Char('i'),
                EditorAction::CursorLeft,
                EditorAction::Char('!'),
            ],
        );
        assert_eq!(state.code(), "h!i");
    }

    #[test]
    fn newline_splits_the_line() {
        let mut state = EditorState::with_code("abcd");
        state.cursor_col = 2;
        let state = apply(state, &[EditorAction::Newline, EditorAction::Char('x')]);
        assert_eq!(state.code(), "ab\nxcd");
        assert_eq!(state.cursor_line, 1);
        assert_eq!(state.cursor_col, 1);
    }

    #[test]
    fn backspace_at_column_zero_joins_lines() {
        let mut state = EditorState::with_code("ab\ncd");
        state.cursor_line = 1;
        state.cursor_col = 0;
        let state = apply(state, &[EditorAction::Backspace]);
        assert_eq!(state.code(), "abcd");
        assert_eq!(state.cursor_line, 0);
        assert_eq!(state.cursor_col, 2);
    }

    #[test]
    fn cursor_clamps_to_shorter_lines() {
        let mut state = EditorState::with_code("long line\nab");
        state.cursor_col = 7;
        let state = apply(state, &[EditorAction::CursorDown]);
        assert_eq!(state.cursor_line, 1);
        assert_eq!(state.cursor_col, 2);
    }

    #[test]
    fn multibyte_characters_edit_cleanly() {
        let state = apply(
            EditorState::with_code(""),
            &[
                EditorAction::Char('é'),
                EditorAction::Char('ß'),
                EditorAction::Backspace,
            ],
        );
        assert_eq!(state.code(), "é");
    }

    #[test]
    fn tab_indents_with_spaces() {
        let state = apply(EditorState::with_code(""), &[EditorAction::Tab]);
        assert_eq!(state.code(), "  ");
        assert_eq!(state.cursor_col, 2);
    }
}
