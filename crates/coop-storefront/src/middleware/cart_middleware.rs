//! Cart Middleware
//!
//! Persists the cart line set across restarts. The reducer stays pure, so on
//! a mutating action this middleware computes the post-action lines itself
//! (the reducer is a cheap pure function) and writes that snapshot; on
//! bootstrap it rehydrates whatever snapshot is readable. A snapshot that
//! fails to parse starts the cart empty.

use crate::actions::{Action, CartAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::cart_reducer::reduce_cart;
use crate::state::{AppState, CartLine};
use coop_config::SnapshotStore;

/// Middleware for cart snapshot persistence
pub struct CartMiddleware {
    cart_store: Box<dyn SnapshotStore<Vec<CartLine>>>,
}

impl CartMiddleware {
    pub fn new(cart_store: Box<dyn SnapshotStore<Vec<CartLine>>>) -> Self {
        Self { cart_store }
    }
}

impl Middleware for CartMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Bootstrap) => {
                if let Some(lines) = self.cart_store.load() {
                    dispatcher.dispatch(Action::Cart(CartAction::Rehydrated(lines)));
                }
                true
            }

            Action::Cart(cart_action) if cart_action.mutates_lines() => {
                // State here is the pre-reduction snapshot; replay the action
                // to persist what the reducer is about to produce
                let next = reduce_cart(state.cart.clone(), cart_action);
                if let Err(e) = self.cart_store.save(&next.lines) {
                    log::error!("CartMiddleware: failed to persist cart: {e}");
                }
                true
            }

            _ => true,
        }
    }
}
