//! Checkout State
//!
//! Transient form state for the checkout screen, including the one-shot
//! delivery-location lookup. Location never blocks submission: the lookup
//! either resolves within its timeout or degrades to `Unavailable`.

use coop_client::{GeoPoint, PaymentMethod, User};

/// Focused field of the checkout form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutField {
    #[default]
    CustomerName,
    Phone,
    DeliveryAddress,
    Notes,
}

impl CheckoutField {
    pub fn next(self) -> Self {
        match self {
            CheckoutField::CustomerName => CheckoutField::Phone,
            CheckoutField::Phone => CheckoutField::DeliveryAddress,
            CheckoutField::DeliveryAddress => CheckoutField::Notes,
            CheckoutField::Notes => CheckoutField::CustomerName,
        }
    }
}

/// Outcome of the delivery-location lookup
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LocationState {
    #[default]
    Idle,
    Looking,
    Available(GeoPoint),
    Unavailable,
}

impl LocationState {
    pub fn point(&self) -> Option<GeoPoint> {
        match self {
            LocationState::Available(point) => Some(*point),
            _ => None,
        }
    }
}

/// Checkout form state
#[derive(Debug, Clone, Default)]
pub struct CheckoutState {
    pub customer_name: String,
    pub phone: String,
    pub delivery_address: String,
    pub notes: String,
    pub payment_method: Option<PaymentMethod>,
    pub focus: CheckoutField,
    pub location: LocationState,
}

impl CheckoutState {
    /// Fresh form prefilled from the session user's profile
    pub fn prefilled(user: &User) -> Self {
        Self {
            customer_name: user.name.clone(),
            phone: user.phone.clone(),
            delivery_address: user.address.clone(),
            ..Self::default()
        }
    }

    pub fn payment(&self) -> PaymentMethod {
        self.payment_method.unwrap_or(PaymentMethod::CashOnDelivery)
    }

    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            CheckoutField::CustomerName => &mut self.customer_name,
            CheckoutField::Phone => &mut self.phone,
            CheckoutField::DeliveryAddress => &mut self.delivery_address,
            CheckoutField::Notes => &mut self.notes,
        }
    }

    /// Required fields present
    pub fn is_complete(&self) -> bool {
        !self.customer_name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.delivery_address.trim().is_empty()
    }
}
