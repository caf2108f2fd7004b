//! Application State

use super::{
    CartState, CatalogState, CheckoutState, OrderState, SessionState, StatusBarState,
};

/// Screens the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Cart,
    Checkout,
    Login,
    Orders,
    Tracking,
    Confirmation,
    AdminDashboard,
    AdminOrders,
    AdminProducts,
}

impl Screen {
    /// Screens that require an authenticated session
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Screen::Checkout
                | Screen::Orders
                | Screen::Tracking
                | Screen::Confirmation
                | Screen::AdminDashboard
                | Screen::AdminOrders
                | Screen::AdminProducts
        )
    }

    /// Screens reserved for admin users
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Screen::AdminDashboard | Screen::AdminOrders | Screen::AdminProducts
        )
    }
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub running: bool,
    pub screen: Screen,
    pub session: SessionState,
    pub cart: CartState,
    pub catalog: CatalogState,
    pub orders: OrderState,
    pub checkout: CheckoutState,
    pub status_bar: StatusBarState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }
}
