//! Checkout actions

use coop_client::GeoPoint;

/// Actions for the checkout slice
#[derive(Debug, Clone)]
pub enum CheckoutAction {
    /// Checkout screen opened: prefill the form and start the one-shot
    /// location lookup
    Open,

    // === Form editing ===
    FormChar(char),
    FormBackspace,
    FormNextField,
    /// Toggle between the fixed payment methods
    CyclePayment,

    // === Delivery-location lookup ===
    LocateStart,
    Located(GeoPoint),
    /// Lookup failed or timed out; submission proceeds without coordinates
    LocationUnavailable,

    /// Submit the form; the checkout middleware builds the order input and
    /// either places the order or composes the UPI WhatsApp hand-off
    Submit,
}
