//! Order actions
//!
//! Fetches target exactly one of the three views (list, tracked, stats).
//! `Patched` carries the full updated order returned by a status update or a
//! cancellation; the reducer applies it to both the list and the tracked
//! view when identifiers match.

use coop_client::{Order, OrderInput, OrderStats, OrderStatus};

/// Actions for the order slice
#[derive(Debug, Clone)]
pub enum OrderAction {
    // === Placement ===
    Place(OrderInput),
    /// Stored as the most-recently-placed order; the order middleware chains
    /// the cart clear and the confirmation screen on this action only
    Placed(Order),
    PlaceFailed(String),

    // === View fetches ===
    FetchList,
    ListLoaded(Vec<Order>),
    ListFailed(String),
    /// Fetch one order into the tracked view
    Track { id: String },
    TrackedLoaded(Order),
    TrackedFailed(String),
    FetchStats,
    StatsLoaded(OrderStats),
    StatsFailed(String),

    // === Point mutations ===
    /// Admin-driven status transition
    UpdateStatus { id: String, status: OrderStatus },
    /// Customer- or admin-initiated cancellation; only offered while the
    /// status allows it
    Cancel { id: String },
    /// A mutation returned the full updated order
    Patched(Order),
    PatchFailed(String),

    // === List navigation ===
    SelectNext,
    SelectPrevious,

    /// Dismiss the inline error banner
    ClearError,
}
