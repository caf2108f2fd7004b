//! Checkout Middleware
//!
//! Orchestrates the checkout flow around the pure form state:
//!
//! - entering the checkout screen opens a fresh prefilled form and starts the
//!   one-shot delivery-location lookup
//! - the lookup resolves against an IP-geolocation endpoint bounded by a
//!   timeout and degrades to `LocationUnavailable`; it never blocks submission
//! - submission builds the order input from the cart and the form; cash
//!   orders go to the backend, UPI orders are handed off as a prefilled
//!   WhatsApp message and never touch the order API

use crate::actions::{Action, CheckoutAction, GlobalAction, OrderAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, NoticeTopic, Screen};
use coop_client::{GeoPoint, OrderInput, OrderItem, PaymentMethod};
use coop_config::AppConfig;
use serde::Deserialize;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Shape of the IP-geolocation response (only the fields we read)
#[derive(Debug, Deserialize)]
struct LocationResponse {
    lat: f64,
    lon: f64,
}

/// Middleware for the checkout flow
pub struct CheckoutMiddleware {
    runtime: Runtime,
    http: reqwest::Client,
    location_url: String,
    location_timeout: Duration,
    whatsapp_number: String,
}

impl CheckoutMiddleware {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            runtime: Runtime::new()?,
            http: reqwest::Client::new(),
            location_url: config.location_url.clone(),
            location_timeout: Duration::from_secs(config.location_timeout_secs),
            whatsapp_number: config.whatsapp_number.clone(),
        })
    }

    fn locate(&self, dispatcher: &Dispatcher) {
        let http = self.http.clone();
        let url = self.location_url.clone();
        let timeout = self.location_timeout;
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let lookup = async {
                let response = http.get(&url).send().await.ok()?;
                response.json::<LocationResponse>().await.ok()
            };
            match tokio::time::timeout(timeout, lookup).await {
                Ok(Some(loc)) => {
                    dispatcher.dispatch(Action::Checkout(CheckoutAction::Located(GeoPoint {
                        lat: loc.lat,
                        lng: loc.lon,
                    })));
                }
                _ => {
                    dispatcher.dispatch(Action::Checkout(CheckoutAction::LocationUnavailable));
                }
            }
        });
    }

    fn submit(&self, state: &AppState, dispatcher: &Dispatcher) {
        if state.cart.is_empty() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                NoticeTopic::Cart,
                "Cart is empty",
            )));
            return;
        }
        if !state.checkout.is_complete() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                NoticeTopic::Checkout,
                "Name, phone and delivery address are required",
            )));
            return;
        }

        let input = build_order_input(state);

        match input.payment_method {
            PaymentMethod::CashOnDelivery => {
                dispatcher.dispatch(Action::Order(OrderAction::Place(input)));
            }
            // UPI orders are arranged over WhatsApp, not through the API
            PaymentMethod::Upi => match whatsapp_url(&self.whatsapp_number, &input) {
                Ok(url) => {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                        NoticeTopic::Checkout,
                        format!("Complete your UPI order on WhatsApp: {url}"),
                    )));
                }
                Err(e) => {
                    log::error!("CheckoutMiddleware: failed to build WhatsApp URL: {e}");
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        NoticeTopic::Checkout,
                        "Could not prepare the WhatsApp hand-off",
                    )));
                }
            },
        }
    }
}

/// Snapshot the cart and form into the order request body
fn build_order_input(state: &AppState) -> OrderInput {
    let checkout = &state.checkout;
    let items = state
        .cart
        .lines
        .iter()
        .map(|line| OrderItem {
            product: line.product.id.clone(),
            name: line.product.name.clone(),
            price: line.product.price,
            quantity: line.quantity,
            unit: line.product.unit.clone(),
        })
        .collect();

    OrderInput {
        customer_name: checkout.customer_name.trim().to_string(),
        phone: checkout.phone.trim().to_string(),
        delivery_address: checkout.delivery_address.trim().to_string(),
        delivery_location: checkout.location.point(),
        payment_method: checkout.payment(),
        notes: checkout.notes.trim().to_string(),
        total_amount: state.cart.total(),
        items,
    }
}

/// Prefilled wa.me link carrying the order summary
fn whatsapp_url(number: &str, input: &OrderInput) -> anyhow::Result<reqwest::Url> {
    let mut message = String::from("Hi! I'd like to place a UPI order:\n");
    for item in &input.items {
        message.push_str(&format!(
            "- {} x {}{}\n",
            item.name, item.quantity, item.unit
        ));
    }
    message.push_str(&format!(
        "Total: {:.2}\nName: {}\nPhone: {}\nAddress: {}\n",
        input.total_amount, input.customer_name, input.phone, input.delivery_address
    ));
    if !input.notes.is_empty() {
        message.push_str(&format!("Notes: {}\n", input.notes));
    }

    let url = reqwest::Url::parse_with_params(
        &format!("https://wa.me/{number}"),
        &[("text", message.as_str())],
    )?;
    Ok(url)
}

impl Middleware for CheckoutMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // Entering the checkout screen opens a fresh form
            Action::Global(GlobalAction::ShowScreen(Screen::Checkout)) => {
                if state.session.is_authenticated() {
                    dispatcher.dispatch(Action::Checkout(CheckoutAction::Open));
                }
                true
            }

            Action::Checkout(CheckoutAction::Open) => {
                dispatcher.dispatch(Action::Checkout(CheckoutAction::LocateStart));
                true
            }

            Action::Checkout(CheckoutAction::LocateStart) => {
                self.locate(dispatcher);
                true
            }

            Action::Checkout(CheckoutAction::Submit) => {
                self.submit(state, dispatcher);
                false
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CartLine, LocationState};
    use coop_client::{Category, Product};

    fn state_with_cart() -> AppState {
        let mut state = AppState::new();
        state.cart.lines = vec![
            CartLine {
                product: Product {
                    id: "p1".to_string(),
                    name: "Curry Cut".to_string(),
                    category: Category::CurryCut,
                    price: 200.0,
                    unit: "kg".to_string(),
                    description: String::new(),
                    image: String::new(),
                    available: true,
                    is_special: false,
                },
                quantity: 0.5,
            },
            CartLine {
                product: Product {
                    id: "p2".to_string(),
                    name: "Wings".to_string(),
                    category: Category::Wings,
                    price: 180.0,
                    unit: "kg".to_string(),
                    description: String::new(),
                    image: String::new(),
                    available: true,
                    is_special: false,
                },
                quantity: 1.0,
            },
        ];
        state.checkout.customer_name = "Asha".to_string();
        state.checkout.phone = "9876543210".to_string();
        state.checkout.delivery_address = "12 Main Rd".to_string();
        state
    }

    #[test]
    fn order_input_snapshots_cart_and_form() {
        let mut state = state_with_cart();
        state.checkout.location = LocationState::Available(GeoPoint {
            lat: 12.97,
            lng: 77.59,
        });
        state.checkout.notes = " ring the bell ".to_string();

        let input = build_order_input(&state);

        assert_eq!(input.items.len(), 2);
        assert_eq!(input.items[0].product, "p1");
        assert_eq!(input.total_amount, 100.0 + 180.0);
        assert_eq!(input.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(input.notes, "ring the bell");
        assert!(input.delivery_location.is_some());
    }

    #[test]
    fn unavailable_location_submits_without_coordinates() {
        let mut state = state_with_cart();
        state.checkout.location = LocationState::Unavailable;

        let input = build_order_input(&state);
        assert!(input.delivery_location.is_none());
    }

    #[test]
    fn whatsapp_url_encodes_the_order_summary() {
        let state = state_with_cart();
        let mut input = build_order_input(&state);
        input.payment_method = PaymentMethod::Upi;

        let url = whatsapp_url("917349729767", &input).unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/917349729767");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(text.contains("Curry Cut x 0.5kg"));
        assert!(text.contains("Total: 280.00"));
        assert!(text.contains("Asha"));
    }
}
