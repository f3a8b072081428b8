//! Dispatcher for middleware action dispatch
//!
//! Middleware (and the async tasks it spawns) dispatch follow-up actions
//! through the Dispatcher. Dispatched actions go into the main loop's
//! action channel and re-enter the store on the next iteration, so a
//! network completion arriving from a tokio task is processed exactly like
//! a key press.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the store loop
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher over the main loop's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed on the next loop iteration
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
