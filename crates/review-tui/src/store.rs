//! Store - holds application state and manages the dispatch loop.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;

/// Store - state plus the middleware chain in front of the reducer
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(initial_state: AppState, dispatcher: Dispatcher) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher,
        }
    }

    /// Add middleware to the store (executed in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through the middleware chain and the reducer.
    ///
    /// A middleware returning `false` consumes the action: it never reaches
    /// the reducer and state is unchanged. Actions dispatched by middleware
    /// re-enter through the action channel, not recursively.
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}
