//! Checkout Reducer
//!
//! `Open` replaces the form with one prefilled from the session user, so a
//! checkout never leaks state from a previous attempt. The location lookup
//! transitions Idle -> Looking -> Available/Unavailable and never blocks
//! submission.

use crate::actions::CheckoutAction;
use crate::state::{CheckoutState, LocationState};
use coop_client::{PaymentMethod, User};

/// Reduce checkout actions; `user` prefills the form on `Open`
pub fn reduce_checkout(
    mut state: CheckoutState,
    action: &CheckoutAction,
    user: Option<&User>,
) -> CheckoutState {
    match action {
        CheckoutAction::Open => {
            state = match user {
                Some(user) => CheckoutState::prefilled(user),
                None => CheckoutState::default(),
            };
        }

        CheckoutAction::FormChar(c) => {
            state.field_mut().push(*c);
        }

        CheckoutAction::FormBackspace => {
            state.field_mut().pop();
        }

        CheckoutAction::FormNextField => {
            state.focus = state.focus.next();
        }

        CheckoutAction::CyclePayment => {
            state.payment_method = Some(match state.payment() {
                PaymentMethod::CashOnDelivery => PaymentMethod::Upi,
                PaymentMethod::Upi => PaymentMethod::CashOnDelivery,
            });
        }

        CheckoutAction::LocateStart => {
            state.location = LocationState::Looking;
        }

        CheckoutAction::Located(point) => {
            state.location = LocationState::Available(*point);
        }

        CheckoutAction::LocationUnavailable => {
            state.location = LocationState::Unavailable;
            log::debug!("Checkout: location lookup unavailable, continuing without");
        }

        // Executed by the checkout middleware
        CheckoutAction::Submit => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CheckoutField;
    use coop_client::{GeoPoint, Role};

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 Main Rd".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn open_prefills_from_profile_and_resets_leftovers() {
        let mut stale = CheckoutState::default();
        stale.notes = "extra spicy".to_string();
        stale.payment_method = Some(PaymentMethod::Upi);
        stale.location = LocationState::Unavailable;

        let u = user();
        let state = reduce_checkout(stale, &CheckoutAction::Open, Some(&u));

        assert_eq!(state.customer_name, "Asha");
        assert_eq!(state.phone, "9876543210");
        assert_eq!(state.delivery_address, "12 Main Rd");
        assert!(state.notes.is_empty());
        assert_eq!(state.payment(), PaymentMethod::CashOnDelivery);
        assert_eq!(state.location, LocationState::Idle);
    }

    #[test]
    fn payment_cycles_between_the_two_methods() {
        let state = CheckoutState::default();
        assert_eq!(state.payment(), PaymentMethod::CashOnDelivery);

        let state = reduce_checkout(state, &CheckoutAction::CyclePayment, None);
        assert_eq!(state.payment(), PaymentMethod::Upi);
        let state = reduce_checkout(state, &CheckoutAction::CyclePayment, None);
        assert_eq!(state.payment(), PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn location_lookup_transitions_and_degrades() {
        let state = reduce_checkout(CheckoutState::default(), &CheckoutAction::LocateStart, None);
        assert_eq!(state.location, LocationState::Looking);

        let found = reduce_checkout(
            state.clone(),
            &CheckoutAction::Located(GeoPoint { lat: 12.97, lng: 77.59 }),
            None,
        );
        assert!(found.location.point().is_some());

        let lost = reduce_checkout(state, &CheckoutAction::LocationUnavailable, None);
        assert_eq!(lost.location, LocationState::Unavailable);
        assert!(lost.location.point().is_none());
    }

    #[test]
    fn completeness_requires_name_phone_and_address() {
        let u = user();
        let state = reduce_checkout(CheckoutState::default(), &CheckoutAction::Open, Some(&u));
        assert!(state.is_complete());

        let mut missing = state.clone();
        missing.delivery_address = "  ".to_string();
        assert!(!missing.is_complete());
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let mut state = CheckoutState::default();
        state = reduce_checkout(state, &CheckoutAction::FormNextField, None);
        assert_eq!(state.focus, CheckoutField::Phone);
        for c in "98x".chars() {
            state = reduce_checkout(state, &CheckoutAction::FormChar(c), None);
        }
        state = reduce_checkout(state, &CheckoutAction::FormBackspace, None);
        assert_eq!(state.phone, "98");
        assert!(state.customer_name.is_empty());
    }
}
