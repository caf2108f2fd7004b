//! Actions module
//!
//! All state changes flow through actions, tagged by the store slice they
//! target. Network-backed operations follow a request/fulfilled/rejected
//! shape: the request variant is intercepted by middleware which performs the
//! I/O and dispatches the completion variant.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod global;
pub mod order;
pub mod session;
pub mod status_bar;

pub use cart::CartAction;
pub use catalog::CatalogAction;
pub use checkout::CheckoutAction;
pub use global::GlobalAction;
pub use order::OrderAction;
pub use session::SessionAction;
pub use status_bar::StatusBarAction;

/// Root action enum - tagged by store slice
#[derive(Debug, Clone)]
pub enum Action {
    Global(GlobalAction),
    Session(SessionAction),
    Cart(CartAction),
    Catalog(CatalogAction),
    Order(OrderAction),
    Checkout(CheckoutAction),
    StatusBar(StatusBarAction),
}
