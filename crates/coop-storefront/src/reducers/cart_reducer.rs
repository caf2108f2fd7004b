//! Cart Reducer
//!
//! Pure cart arithmetic. Invariants: at most one line per product id, every
//! quantity > 0 (a quantity reaching zero deletes the line), quantities
//! rounded to two decimal places.

use crate::actions::CartAction;
use crate::state::{round_quantity, CartLine, CartState, Toast};

/// Reduce cart actions
pub fn reduce_cart(mut state: CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::Add { product, quantity } => {
            if let Some(line) = state
                .lines
                .iter_mut()
                .find(|l| l.product.id == product.id)
            {
                line.quantity = round_quantity(line.quantity + quantity);
            } else {
                state.lines.push(CartLine {
                    product: product.clone(),
                    quantity: round_quantity(*quantity),
                });
            }
            state.toast = Some(Toast {
                message: format!("{} added to cart!", product.name),
            });
            log::debug!("Cart: added {} x{}", product.name, quantity);
        }

        CartAction::Remove { product_id } => {
            state.lines.retain(|l| l.product.id != *product_id);
            clamp_selection(&mut state);
        }

        CartAction::SetQuantity {
            product_id,
            quantity,
        } => {
            // Rounded first: a quantity that rounds to zero deletes the
            // line, same as Remove
            let quantity = round_quantity(*quantity);
            if quantity <= 0.0 {
                state.lines.retain(|l| l.product.id != *product_id);
                clamp_selection(&mut state);
            } else if let Some(line) = state
                .lines
                .iter_mut()
                .find(|l| l.product.id == *product_id)
            {
                line.quantity = quantity;
            }
        }

        CartAction::Clear => {
            state.lines.clear();
            state.selected = 0;
        }

        CartAction::Rehydrated(lines) => {
            state.lines = lines.clone();
            log::info!("Cart: rehydrated {} lines", state.lines.len());
        }

        CartAction::ClearToast => {
            state.toast = None;
        }

        CartAction::SelectNext => {
            if !state.lines.is_empty() {
                state.selected = (state.selected + 1) % state.lines.len();
            }
        }

        CartAction::SelectPrevious => {
            if !state.lines.is_empty() {
                state.selected = state
                    .selected
                    .checked_sub(1)
                    .unwrap_or(state.lines.len() - 1);
            }
        }
    }

    state
}

fn clamp_selection(state: &mut CartState) {
    if state.selected >= state.lines.len() {
        state.selected = state.lines.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coop_client::{Category, Product};

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: Category::CurryCut,
            price,
            unit: "kg".to_string(),
            description: String::new(),
            image: String::new(),
            available: true,
            is_special: false,
        }
    }

    fn add(state: CartState, p: &Product, quantity: f64) -> CartState {
        reduce_cart(
            state,
            &CartAction::Add {
                product: p.clone(),
                quantity,
            },
        )
    }

    #[test]
    fn add_default_half_kg_totals_half_price() {
        let p = product("p1", 200.0);
        let state = add(CartState::default(), &p, 0.5);
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.total(), 100.0);
    }

    #[test]
    fn add_same_product_merges_into_one_line() {
        let p = product("p1", 200.0);
        let state = add(CartState::default(), &p, 0.5);
        let state = add(state, &p, 0.5);
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.lines[0].quantity, 1.0);
        assert_eq!(state.total(), 200.0);
    }

    #[test]
    fn no_duplicate_lines_across_mixed_sequences() {
        let p1 = product("p1", 100.0);
        let p2 = product("p2", 50.0);
        let mut state = CartState::default();
        state = add(state, &p1, 0.5);
        state = add(state, &p2, 0.5);
        state = add(state, &p1, 1.0);
        state = reduce_cart(
            state,
            &CartAction::SetQuantity {
                product_id: "p2".to_string(),
                quantity: 2.0,
            },
        );
        assert_eq!(state.line_count(), 2);
        assert!(state.lines.iter().all(|l| l.quantity > 0.0));
        let ids: Vec<_> = state.lines.iter().map(|l| l.product.id.as_str()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    #[test]
    fn set_quantity_zero_equals_remove() {
        let p = product("p1", 200.0);

        let via_zero = reduce_cart(
            add(CartState::default(), &p, 0.5),
            &CartAction::SetQuantity {
                product_id: "p1".to_string(),
                quantity: 0.0,
            },
        );
        let via_remove = reduce_cart(
            add(CartState::default(), &p, 0.5),
            &CartAction::Remove {
                product_id: "p1".to_string(),
            },
        );

        assert!(via_zero.is_empty());
        assert!(via_remove.is_empty());
        assert_eq!(via_zero.total(), via_remove.total());
    }

    #[test]
    fn quantity_arithmetic_rounds_to_two_decimals() {
        let p = product("p1", 100.0);
        let mut state = add(CartState::default(), &p, 0.5);
        state = reduce_cart(
            state,
            &CartAction::SetQuantity {
                product_id: "p1".to_string(),
                quantity: 0.3,
            },
        );
        assert_eq!(state.lines[0].quantity, 0.3);

        // 0.3 - 0.3 reaches zero and deletes the line
        state = reduce_cart(
            state,
            &CartAction::SetQuantity {
                product_id: "p1".to_string(),
                quantity: 0.3 - 0.3,
            },
        );
        assert!(state.is_empty());
    }

    #[test]
    fn quantity_rounding_to_zero_also_removes() {
        let p = product("p1", 200.0);
        let state = reduce_cart(
            add(CartState::default(), &p, 0.5),
            &CartAction::SetQuantity {
                product_id: "p1".to_string(),
                quantity: 0.004,
            },
        );
        assert!(state.is_empty());
        assert!(state.lines.iter().all(|l| l.quantity > 0.0));
    }

    #[test]
    fn total_is_recomputed_from_current_lines() {
        let p1 = product("p1", 200.0);
        let p2 = product("p2", 80.0);
        let mut state = CartState::default();
        state = add(state, &p1, 0.5);
        state = add(state, &p2, 1.5);
        assert_eq!(state.total(), 100.0 + 120.0);

        state = reduce_cart(
            state,
            &CartAction::Remove {
                product_id: "p1".to_string(),
            },
        );
        assert_eq!(state.total(), 120.0);

        state = reduce_cart(state, &CartAction::Clear);
        assert_eq!(state.total(), 0.0);
    }

    #[test]
    fn add_sets_toast_keyed_to_product_name() {
        let p = product("p1", 200.0);
        let state = add(CartState::default(), &p, 0.5);
        assert_eq!(
            state.toast.as_ref().map(|t| t.message.as_str()),
            Some("Product p1 added to cart!")
        );
        let state = reduce_cart(state, &CartAction::ClearToast);
        assert!(state.toast.is_none());
    }

    #[test]
    fn set_quantity_unknown_id_is_a_noop() {
        let p = product("p1", 200.0);
        let before = add(CartState::default(), &p, 0.5);
        let after = reduce_cart(
            before.clone(),
            &CartAction::SetQuantity {
                product_id: "missing".to_string(),
                quantity: 2.0,
            },
        );
        assert_eq!(after.line_count(), before.line_count());
        assert_eq!(after.total(), before.total());
    }
}
