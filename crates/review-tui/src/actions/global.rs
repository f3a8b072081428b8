//! Global actions - not tied to any single component.

use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Actions that affect the application as a whole
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation by the keyboard middleware)
    KeyPressed(KeyEvent),
    /// Left mouse button pressed at (x, y); `frame` is the terminal area at
    /// the time of the click, so reducers can hit-test against the same
    /// geometry the views drew with
    MouseClick { x: u16, y: u16, frame: Rect },
    /// Quit the application
    Quit,
    /// Periodic tick while idle polling (drives the loading spinner)
    Tick,
}
