//! Root Reducer
//!
//! Delegates slice actions to their reducers and handles global navigation.
//! Screen changes are guarded here: an unauthenticated session is redirected
//! to the login screen, a non-admin session is kept off the admin screens.

use super::{
    cart_reducer::reduce_cart, catalog_reducer::reduce_catalog,
    checkout_reducer::reduce_checkout, order_reducer::reduce_order,
    session_reducer::reduce_session, status_bar_reducer::reduce_status_bar,
};
use crate::actions::{Action, GlobalAction};
use crate::state::{AppState, Screen};

/// Reduce any action into the next application state
pub fn reduce_app(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => match global {
            GlobalAction::Quit => {
                state.running = false;
                log::info!("App: quitting");
            }

            GlobalAction::ShowScreen(screen) => {
                state.screen = resolve_screen(&state, *screen);
            }

            // Translated by middleware (keyboard, bootstrap), nothing to reduce
            GlobalAction::KeyPressed(_) | GlobalAction::Bootstrap => {}
        },

        Action::Session(session) => {
            state.session = reduce_session(state.session, session);
        }

        Action::Cart(cart) => {
            state.cart = reduce_cart(state.cart, cart);
        }

        Action::Catalog(catalog) => {
            state.catalog = reduce_catalog(state.catalog, catalog);
        }

        Action::Order(order) => {
            state.orders = reduce_order(state.orders, order);
        }

        Action::Checkout(checkout) => {
            let user = state.session.user.clone();
            state.checkout = reduce_checkout(state.checkout, checkout, user.as_ref());
        }

        Action::StatusBar(status) => {
            state.status_bar = reduce_status_bar(state.status_bar, status);
        }
    }

    state
}

/// Apply the auth/admin guards to a requested screen
fn resolve_screen(state: &AppState, requested: Screen) -> Screen {
    if requested.requires_auth() && !state.session.is_authenticated() {
        log::debug!("App: {requested:?} requires auth, redirecting to login");
        return Screen::Login;
    }
    if requested.requires_admin() && !state.session.is_admin() {
        log::warn!("App: {requested:?} requires admin, redirecting to menu");
        return Screen::Menu;
    }
    requested
}
