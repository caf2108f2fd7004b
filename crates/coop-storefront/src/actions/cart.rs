//! Cart actions
//!
//! The cart mutates synchronously in the reducer; the cart middleware only
//! persists the resulting line set and never consumes these actions.

use crate::state::CartLine;
use coop_client::Product;

/// Actions for the cart slice
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add a product snapshot; merges into an existing line by product id
    Add { product: Product, quantity: f64 },
    /// Delete a line unconditionally
    Remove { product_id: String },
    /// Set a line's quantity; `quantity <= 0` behaves like `Remove`
    SetQuantity { product_id: String, quantity: f64 },
    /// Empty the cart
    Clear,
    /// Replace the cart from a rehydrated snapshot (bootstrap only)
    Rehydrated(Vec<CartLine>),
    /// Dismiss the transient add-to-cart toast
    ClearToast,
    /// Move the cart cursor
    SelectNext,
    SelectPrevious,
}

impl CartAction {
    /// Whether this action changes the persisted line set
    pub fn mutates_lines(&self) -> bool {
        matches!(
            self,
            CartAction::Add { .. }
                | CartAction::Remove { .. }
                | CartAction::SetQuantity { .. }
                | CartAction::Clear
        )
    }
}
