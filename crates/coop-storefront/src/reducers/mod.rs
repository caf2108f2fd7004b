//! Reducers - pure functions that produce new state from state + action
//!
//! Each store slice has its own reducer; `app_reducer` is the root that
//! orchestrates them. Reducers never perform I/O; persistence and network
//! effects live in middleware.

pub mod app_reducer;
pub mod cart_reducer;
pub mod catalog_reducer;
pub mod checkout_reducer;
pub mod order_reducer;
pub mod session_reducer;
pub mod status_bar_reducer;

pub use app_reducer::reduce_app;
