//! Storefront API data transfer objects
//!
//! These types mirror the wire format of the backend REST API (camelCase
//! fields, MongoDB-style `_id` identifiers). They are intentionally separate
//! from application state types to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product category, a fixed contract shared with the backend
///
/// The wire strings are display strings; do not re-derive them anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Whole Chicken")]
    WholeChicken,
    #[serde(rename = "Chicken Curry Cut")]
    CurryCut,
    #[serde(rename = "Boneless Chicken")]
    Boneless,
    #[serde(rename = "Chicken Wings")]
    Wings,
    #[serde(rename = "Chicken Liver & Gizzard")]
    LiverGizzard,
}

impl Category {
    /// All categories in menu display order
    pub const ALL: [Category; 5] = [
        Category::WholeChicken,
        Category::CurryCut,
        Category::Boneless,
        Category::Wings,
        Category::LiverGizzard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::WholeChicken => "Whole Chicken",
            Category::CurryCut => "Chicken Curry Cut",
            Category::Boneless => "Boneless Chicken",
            Category::Wings => "Chicken Wings",
            Category::LiverGizzard => "Chicken Liver & Gizzard",
        }
    }
}

/// A product from the catalog endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub category: Category,

    /// Price per unit, currency-agnostic
    pub price: f64,

    /// Unit label the price refers to (e.g., "kg")
    pub unit: String,

    #[serde(default)]
    pub description: String,

    /// Image reference, opaque to the client
    #[serde(default)]
    pub image: String,

    /// Whether the product can currently be ordered
    #[serde(default = "default_true")]
    pub available: bool,

    /// Highlighted as a special offer on the menu
    #[serde(default)]
    pub is_special: bool,
}

fn default_true() -> bool {
    true
}

/// Fields accepted by the admin create/update product endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub unit: String,
    pub description: String,
    pub image: String,
    pub available: bool,
    pub is_special: bool,
}

/// User role, fixed contract with the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

/// An authenticated user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub role: Role,
}

/// Response of the credential-exchange endpoints (login/signup)
///
/// The backend returns the user fields inline next to the token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

/// Payment method, fixed contract with the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "UPI")]
    Upi,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::Upi => "UPI",
        }
    }
}

/// A delivery geolocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Order delivery status
///
/// `Pending -> Preparing -> OutForDelivery -> Delivered` is the admin-driven
/// forward path. `Cancelled` is reachable from `Pending` or `Preparing` only.
/// `Delivered` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The forward delivery path, in step order
    pub const FORWARD_PATH: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// All statuses an admin can assign
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Zero-based index into [`Self::FORWARD_PATH`], `None` for `Cancelled`
    ///
    /// The tracking stepper treats `None` as "no step complete" and renders a
    /// terminal cancelled state instead.
    pub fn step_index(&self) -> Option<usize> {
        Self::FORWARD_PATH.iter().position(|s| s == self)
    }

    /// Whether no further transition is permitted
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether the client may offer cancellation
    ///
    /// The backend is the authority; the client only hides the affordance.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Preparing)
    }
}

/// A line item snapshot inside an order
///
/// Snapshots are taken at order creation and never re-read from the live
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product id the snapshot was taken from
    pub product: String,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub unit: String,
}

/// An order as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub delivery_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<GeoPoint>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub notes: String,
    pub items: Vec<OrderItem>,
    /// Fixed at creation time, never recomputed from live prices
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Short human-facing order reference (last 8 id chars, uppercased)
    pub fn short_ref(&self) -> String {
        let tail: String = self
            .id
            .chars()
            .rev()
            .take(8)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        tail.to_uppercase()
    }
}

/// Body of POST /api/orders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub customer_name: String,
    pub phone: String,
    pub delivery_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<GeoPoint>,
    pub payment_method: PaymentMethod,
    pub notes: String,
    pub total_amount: f64,
    pub items: Vec<OrderItem>,
}

/// Admin order aggregates, derived entirely server-side
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    #[serde(default)]
    pub today_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub preparing_orders: u64,
    #[serde(default)]
    pub delivered_orders: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_wire_strings() {
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.label()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn status_step_index_follows_forward_path() {
        assert_eq!(OrderStatus::Pending.step_index(), Some(0));
        assert_eq!(OrderStatus::Preparing.step_index(), Some(1));
        assert_eq!(OrderStatus::OutForDelivery.step_index(), Some(2));
        assert_eq!(OrderStatus::Delivered.step_index(), Some(3));
        assert_eq!(OrderStatus::Cancelled.step_index(), None);
    }

    #[test]
    fn terminal_statuses_cannot_cancel() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(OrderStatus::Preparing.can_cancel());
        assert!(!OrderStatus::OutForDelivery.can_cancel());
        assert!(!OrderStatus::Delivered.can_cancel());
        assert!(!OrderStatus::Cancelled.can_cancel());
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn order_deserializes_backend_shape() {
        let json = r#"{
            "_id": "64f1b2c3d4e5f60718293a4b",
            "customerName": "Asha",
            "phone": "9876543210",
            "deliveryAddress": "12 Main Rd",
            "paymentMethod": "Cash on Delivery",
            "items": [
                {"product": "p1", "name": "Curry Cut", "price": 200.0, "quantity": 0.5, "unit": "kg"}
            ],
            "totalAmount": 100.0,
            "status": "Out for Delivery",
            "createdAt": "2024-05-01T09:30:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.short_ref(), "18293A4B");
        assert!(order.delivery_location.is_none());
        assert_eq!(order.items[0].quantity, 0.5);
    }

    #[test]
    fn auth_response_flattens_user_fields() {
        let json = r#"{
            "token": "abc.def.ghi",
            "_id": "u1",
            "name": "Asha",
            "email": "a@b.com",
            "role": "customer"
        }"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.token, "abc.def.ghi");
        assert_eq!(auth.user.role, Role::Customer);
        assert_eq!(auth.user.phone, "");
    }
}
