use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod api_middleware;
pub mod cart_middleware;
pub mod checkout_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod session_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware receives a read-only snapshot of the state as it was before
/// the action reduces, plus a dispatcher whose actions re-enter the chain.
///
/// Returns `true` to continue the chain, `false` to consume the action.
pub trait Middleware: Send {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
