//! Order State
//!
//! Three independently-addressable views over order data: the order list,
//! the single tracked order, and the admin aggregates. Each fetch targets
//! exactly one view; they share one loading flag, so a slow stats call shows
//! the same spinner as a list fetch.

use coop_client::{Order, OrderStats};

/// Order state
#[derive(Debug, Clone, Default)]
pub struct OrderState {
    /// Current user's (or, for admins, all) orders
    pub list: Vec<Order>,
    /// The order currently shown in the tracking view
    pub tracked: Option<Order>,
    /// Admin aggregates, server-derived
    pub stats: Option<OrderStats>,
    /// Most recently placed order, for the confirmation screen
    pub last_placed: Option<Order>,
    pub loading: bool,
    pub error: Option<String>,
    /// Cursor position in order lists
    pub selected: usize,
}

impl OrderState {
    pub fn selected_order(&self) -> Option<&Order> {
        self.list.get(self.selected)
    }

    /// Patch both the list view and the tracked view from a mutated order
    ///
    /// Views whose identifier does not match are left untouched, so whichever
    /// screen is open reflects the change without a refetch.
    pub fn patch(&mut self, updated: Order) {
        if let Some(existing) = self.list.iter_mut().find(|o| o.id == updated.id) {
            *existing = updated.clone();
        }
        if self
            .tracked
            .as_ref()
            .is_some_and(|t| t.id == updated.id)
        {
            self.tracked = Some(updated);
        }
    }
}
