//! Action tracing middleware.
//!
//! Logs every action flowing through the store, except the periodic tick
//! which would drown the log file.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Tick) => {}
            Action::Global(GlobalAction::KeyPressed(_)) => {
                log::trace!("Action: {:?}", action);
            }
            _ => log::debug!("Action: {:?}", action),
        }
        true
    }
}
