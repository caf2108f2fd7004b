//! Order Reducer
//!
//! Completion actions land here; request actions (`Place`, fetches, status
//! updates, cancellations) are executed by the order middleware. `Patched`
//! applies a mutated order to both the list view and the tracked view when
//! identifiers match.

use crate::actions::OrderAction;
use crate::state::OrderState;

/// Reduce order actions
pub fn reduce_order(mut state: OrderState, action: &OrderAction) -> OrderState {
    match action {
        OrderAction::Placed(order) => {
            state.loading = false;
            state.error = None;
            state.last_placed = Some(order.clone());
            log::info!("Orders: placed order {}", order.short_ref());
        }

        OrderAction::PlaceFailed(message) => {
            state.loading = false;
            state.error = Some(message.clone());
        }

        OrderAction::ListLoaded(orders) => {
            state.loading = false;
            state.error = None;
            state.list = orders.clone();
            if state.selected >= state.list.len() {
                state.selected = state.list.len().saturating_sub(1);
            }
        }

        OrderAction::ListFailed(message) => {
            state.loading = false;
            state.error = Some(message.clone());
        }

        OrderAction::TrackedLoaded(order) => {
            state.loading = false;
            state.error = None;
            state.tracked = Some(order.clone());
        }

        OrderAction::TrackedFailed(message) => {
            state.loading = false;
            state.tracked = None;
            state.error = Some(message.clone());
        }

        OrderAction::StatsLoaded(stats) => {
            state.loading = false;
            state.error = None;
            state.stats = Some(*stats);
        }

        OrderAction::StatsFailed(message) => {
            state.loading = false;
            state.error = Some(message.clone());
        }

        OrderAction::Patched(order) => {
            state.loading = false;
            state.error = None;
            state.patch(order.clone());
        }

        OrderAction::PatchFailed(message) => {
            state.loading = false;
            state.error = Some(message.clone());
        }

        OrderAction::SelectNext => {
            if !state.list.is_empty() {
                state.selected = (state.selected + 1) % state.list.len();
            }
        }

        OrderAction::SelectPrevious => {
            if !state.list.is_empty() {
                state.selected = state
                    .selected
                    .checked_sub(1)
                    .unwrap_or(state.list.len() - 1);
            }
        }

        OrderAction::ClearError => {
            state.error = None;
        }

        // Request variants enter loading and are executed by middleware
        OrderAction::Place(_)
        | OrderAction::FetchList
        | OrderAction::Track { .. }
        | OrderAction::FetchStats
        | OrderAction::UpdateStatus { .. }
        | OrderAction::Cancel { .. } => {
            state.loading = true;
            state.error = None;
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use coop_client::{Order, OrderStatus, PaymentMethod};

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer_name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            delivery_address: "12 Main Rd".to_string(),
            delivery_location: None,
            payment_method: PaymentMethod::CashOnDelivery,
            notes: String::new(),
            items: vec![],
            total_amount: 100.0,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn patched_updates_list_and_tracked_when_both_match() {
        let mut state = OrderState::default();
        state.list = vec![
            order("o1", OrderStatus::Pending),
            order("o2", OrderStatus::Pending),
        ];
        state.tracked = Some(order("o1", OrderStatus::Pending));

        let state = reduce_order(state, &OrderAction::Patched(order("o1", OrderStatus::Preparing)));

        assert_eq!(state.list[0].status, OrderStatus::Preparing);
        assert_eq!(state.list[1].status, OrderStatus::Pending);
        assert_eq!(
            state.tracked.as_ref().map(|o| o.status),
            Some(OrderStatus::Preparing)
        );
    }

    #[test]
    fn patched_leaves_unrelated_tracked_order_alone() {
        let mut state = OrderState::default();
        state.list = vec![order("o1", OrderStatus::Pending)];
        state.tracked = Some(order("o2", OrderStatus::OutForDelivery));

        let state = reduce_order(state, &OrderAction::Patched(order("o1", OrderStatus::Cancelled)));

        assert_eq!(state.list[0].status, OrderStatus::Cancelled);
        assert_eq!(
            state.tracked.as_ref().map(|o| o.status),
            Some(OrderStatus::OutForDelivery)
        );
    }

    #[test]
    fn patched_with_unknown_id_changes_nothing() {
        let mut state = OrderState::default();
        state.list = vec![order("o1", OrderStatus::Pending)];

        let state = reduce_order(
            state,
            &OrderAction::Patched(order("missing", OrderStatus::Delivered)),
        );

        assert_eq!(state.list.len(), 1);
        assert_eq!(state.list[0].status, OrderStatus::Pending);
        assert!(state.tracked.is_none());
    }

    #[test]
    fn delivered_while_tracked_reflects_in_the_open_view() {
        let mut state = OrderState::default();
        state.tracked = Some(order("o9", OrderStatus::OutForDelivery));

        let state = reduce_order(state, &OrderAction::Patched(order("o9", OrderStatus::Delivered)));

        let tracked = state.tracked.as_ref().unwrap();
        assert_eq!(tracked.status, OrderStatus::Delivered);
        assert!(tracked.status.is_terminal());
    }

    #[test]
    fn fetch_failure_keeps_previous_list() {
        let mut state = OrderState::default();
        state.list = vec![order("o1", OrderStatus::Pending)];

        let state = reduce_order(state, &OrderAction::FetchList);
        assert!(state.loading);

        let state = reduce_order(state, &OrderAction::ListFailed("down".to_string()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("down"));
        assert_eq!(state.list.len(), 1);
    }

    #[test]
    fn placed_stores_the_confirmation_order() {
        let state = reduce_order(
            OrderState::default(),
            &OrderAction::Placed(order("64f1b2c3d4e5f60718293a4b", OrderStatus::Pending)),
        );
        assert_eq!(
            state.last_placed.as_ref().map(|o| o.short_ref()),
            Some("18293A4B".to_string())
        );
    }

    #[test]
    fn list_selection_wraps_in_both_directions() {
        let mut state = OrderState::default();
        state.list = vec![
            order("o1", OrderStatus::Pending),
            order("o2", OrderStatus::Pending),
        ];

        let state = reduce_order(state, &OrderAction::SelectPrevious);
        assert_eq!(state.selected, 1);
        let state = reduce_order(state, &OrderAction::SelectNext);
        assert_eq!(state.selected, 0);
    }
}
