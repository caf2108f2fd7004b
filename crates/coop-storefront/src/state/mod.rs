//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod cart;
mod catalog;
mod checkout;
mod order;
mod session;
mod status_bar;

pub use app::{AppState, Screen};
pub use cart::{round_quantity, CartLine, CartState, Toast, DEFAULT_ADD_QUANTITY};
pub use catalog::{CatalogState, ProductField, ProductFormState};
pub use checkout::{CheckoutField, CheckoutState, LocationState};
pub use order::OrderState;
pub use session::{AuthField, AuthMode, LoginFormState, SessionState};
pub use status_bar::{Notice, NoticeKind, NoticeTopic, StatusBarState};
