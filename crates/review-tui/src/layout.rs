//! Screen geometry.
//!
//! Pure functions from the terminal area to component rects. Views draw
//! with these rects and reducers hit-test mouse clicks against the same
//! functions, so "outside the dropdown" means the same thing to both.

use crate::state::LanguageSelectorState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the language indicator in the header (also the dropdown width).
pub const LANGUAGE_INDICATOR_WIDTH: u16 = 18;
/// Settings overlay size.
const SETTINGS_WIDTH: u16 = 44;
const SETTINGS_HEIGHT: u16 = 8;

/// The fixed chrome around the two panes.
pub struct Panes {
    pub header: Rect,
    pub editor: Rect,
    pub review: Rect,
    pub status: Rect,
}

/// Split the terminal into header, editor/review panes and status bar.
pub fn panes(area: Rect) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(0),    // panes
            Constraint::Length(1), // status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    Panes {
        header: rows[0],
        editor: columns[0],
        review: columns[1],
        status: rows[2],
    }
}

/// The clickable language indicator at the right edge of the header.
pub fn language_indicator(area: Rect) -> Rect {
    let header = panes(area).header;
    let width = LANGUAGE_INDICATOR_WIDTH.min(header.width);
    Rect {
        x: header.right().saturating_sub(width),
        y: header.y,
        width,
        height: header.height.min(1),
    }
}

/// The dropdown overlay, anchored under the language indicator.
pub fn language_dropdown(area: Rect) -> Rect {
    let indicator = language_indicator(area);
    let entries = LanguageSelectorState::entries().len() as u16;
    let dropdown = Rect {
        x: indicator.x,
        y: indicator.bottom(),
        width: indicator.width,
        height: entries + 2, // entries plus the border
    };
    dropdown.intersection(area)
}

/// Row index of the dropdown entry at a screen position, if any.
pub fn dropdown_entry_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    let dropdown = language_dropdown(area);
    // Inner region inside the border
    let inner = Rect {
        x: dropdown.x + 1,
        y: dropdown.y + 1,
        width: dropdown.width.saturating_sub(2),
        height: dropdown.height.saturating_sub(2),
    };
    if !contains(inner, x, y) {
        return None;
    }
    let row = (y - inner.y) as usize;
    (row < LanguageSelectorState::entries().len()).then_some(row)
}

/// The centered settings overlay.
pub fn settings_panel(area: Rect) -> Rect {
    let width = SETTINGS_WIDTH.min(area.width);
    let height = SETTINGS_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Whether a screen position lies inside a rect.
pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    #[test]
    fn panes_cover_the_frame() {
        let panes = panes(FRAME);
        assert_eq!(panes.header.y, 0);
        assert_eq!(panes.status.bottom(), FRAME.height);
        assert_eq!(panes.editor.y, panes.review.y);
        assert_eq!(panes.editor.right(), panes.review.x);
    }

    #[test]
    fn dropdown_sits_under_the_indicator() {
        let indicator = language_indicator(FRAME);
        let dropdown = language_dropdown(FRAME);
        assert_eq!(dropdown.x, indicator.x);
        assert_eq!(dropdown.y, indicator.bottom());
    }

    #[test]
    fn dropdown_rows_map_to_entries() {
        let dropdown = language_dropdown(FRAME);
        // First entry is just inside the border
        assert_eq!(dropdown_entry_at(FRAME, dropdown.x + 1, dropdown.y + 1), Some(0));
        // The border itself is no entry
        assert_eq!(dropdown_entry_at(FRAME, dropdown.x, dropdown.y), None);
        // Far away is outside
        assert_eq!(dropdown_entry_at(FRAME, 0, 20), None);
    }

    #[test]
    fn settings_panel_is_centered_and_clamped() {
        let panel = settings_panel(FRAME);
        assert!(panel.width <= FRAME.width);
        assert!(contains(FRAME, panel.x, panel.y));

        let tiny = Rect { x: 0, y: 0, width: 10, height: 4 };
        let clamped = settings_panel(tiny);
        assert!(clamped.width <= 10 && clamped.height <= 4);
    }
}
