use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod mouse_middleware;
pub mod review_middleware;

pub use keyboard_middleware::KeyboardMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use mouse_middleware::MouseMiddleware;
pub use review_middleware::ReviewMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware may perform side effects (network calls, logging) and dispatch
/// follow-up actions via the dispatcher.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: the action to process
    /// - `state`: current application state (read-only snapshot)
    /// - `dispatcher`: for follow-up actions that re-enter the store loop
    ///
    /// Returns `true` to continue the chain, `false` to consume the action.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
