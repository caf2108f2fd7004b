//! Cart State
//!
//! The cart is the one store with no backend counterpart: lines are product
//! snapshots taken at add time, and the whole set is persisted locally after
//! every mutation. Derived totals are recomputed on every read, never cached.

use coop_client::Product;
use serde::{Deserialize, Serialize};

/// Quantity granularity used by the add-to-cart shortcut (half a unit)
pub const DEFAULT_ADD_QUANTITY: f64 = 0.5;

/// Round a quantity to two decimal places
pub fn round_quantity(quantity: f64) -> f64 {
    (quantity * 100.0).round() / 100.0
}

/// One product's quantity entry in the shopping cart
///
/// Invariants maintained by the cart reducer: at most one line per product
/// id, quantity always > 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: f64,
}

impl CartLine {
    /// Monetary value of this line
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity
    }
}

/// Transient success notification shown after a cart add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

/// Cart state
#[derive(Debug, Clone, Default)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    pub toast: Option<Toast>,
    /// Cursor position in the cart view
    pub selected: usize,
}

impl CartState {
    /// Number of distinct lines (not summed quantity)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Monetary total, recomputed fresh on every call
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn line_for(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
