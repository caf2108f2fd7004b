//! Dispatcher for middleware action dispatch
//!
//! Middleware (including async tasks it spawns) dispatches follow-up actions
//! through the Dispatcher. Dispatched actions land on the action channel and
//! re-enter the middleware chain from the beginning, so middleware can trigger
//! other middleware handlers: a fulfilled order placement dispatches the cart
//! clear and the confirmation screen the same way a key press would.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    ///
    /// `action_tx` feeds the channel the main loop drains, so dispatched
    /// actions re-enter the middleware chain.
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {e}");
        }
    }
}
