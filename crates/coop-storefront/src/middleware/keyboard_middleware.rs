//! Keyboard Middleware - translates key events into screen-aware actions
//!
//! Raw `KeyPressed` events are consumed here and re-emitted as domain
//! actions. Three layers:
//!
//! 1. Priority keys that always work (Ctrl+C quits)
//! 2. Text-input screens route character keys into the focused form field
//! 3. Everything else is looked up in the per-screen keymap

use crate::actions::{
    Action, CartAction, CatalogAction, CheckoutAction, GlobalAction, OrderAction, SessionAction,
};
use crate::dispatcher::Dispatcher;
use crate::state::{AppState, Screen, DEFAULT_ADD_QUANTITY};
use crate::middleware::Middleware;
use coop_client::OrderStatus;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Middleware for keyboard input translation
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // Ctrl+C: emergency quit, works everywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        match state.screen {
            Screen::Menu => self.menu_key(key, state, dispatcher),
            Screen::Cart => self.cart_key(key, state, dispatcher),
            Screen::Checkout => self.checkout_key(key, dispatcher),
            Screen::Login => self.login_key(key, dispatcher),
            Screen::Orders => self.orders_key(key, state, dispatcher),
            Screen::Tracking => self.tracking_key(key, state, dispatcher),
            Screen::Confirmation => self.confirmation_key(key, state, dispatcher),
            Screen::AdminDashboard => self.dashboard_key(key, dispatcher),
            Screen::AdminOrders => self.admin_orders_key(key, state, dispatcher),
            Screen::AdminProducts => self.admin_products_key(key, state, dispatcher),
        }
    }

    fn menu_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        if state.cart.toast.is_some() {
            dispatcher.dispatch(Action::Cart(CartAction::ClearToast));
        }
        match key.code {
            KeyCode::Char('q') => dispatcher.dispatch(Action::Global(GlobalAction::Quit)),
            KeyCode::Down | KeyCode::Char('j') => {
                dispatcher.dispatch(Action::Catalog(CatalogAction::SelectNext))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                dispatcher.dispatch(Action::Catalog(CatalogAction::SelectPrevious))
            }
            KeyCode::Char('f') => dispatcher.dispatch(Action::Catalog(CatalogAction::CycleFilter)),
            KeyCode::Enter | KeyCode::Char('a') => {
                if let Some(product) = state.catalog.selected_product() {
                    dispatcher.dispatch(Action::Cart(CartAction::Add {
                        product: product.clone(),
                        quantity: DEFAULT_ADD_QUANTITY,
                    }));
                }
            }
            KeyCode::Char('r') => dispatcher.dispatch(Action::Catalog(CatalogAction::FetchPublic)),
            KeyCode::Char('c') => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Cart)))
            }
            KeyCode::Char('o') => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Orders)));
                dispatcher.dispatch(Action::Order(OrderAction::FetchList));
            }
            KeyCode::Char('u') => {
                if state.session.is_authenticated() {
                    dispatcher.dispatch(Action::Session(SessionAction::Logout));
                } else {
                    dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Login)));
                }
            }
            KeyCode::Char('d') => {
                if state.session.is_admin() {
                    dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(
                        Screen::AdminDashboard,
                    )));
                    dispatcher.dispatch(Action::Order(OrderAction::FetchStats));
                }
            }
            _ => {}
        }
    }

    fn cart_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let selected = state.cart.lines.get(state.cart.selected);
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Menu)))
            }
            KeyCode::Char('q') => dispatcher.dispatch(Action::Global(GlobalAction::Quit)),
            KeyCode::Down | KeyCode::Char('j') => {
                dispatcher.dispatch(Action::Cart(CartAction::SelectNext))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                dispatcher.dispatch(Action::Cart(CartAction::SelectPrevious))
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(line) = selected {
                    dispatcher.dispatch(Action::Cart(CartAction::SetQuantity {
                        product_id: line.product.id.clone(),
                        quantity: line.quantity + DEFAULT_ADD_QUANTITY,
                    }));
                }
            }
            KeyCode::Char('-') => {
                if let Some(line) = selected {
                    dispatcher.dispatch(Action::Cart(CartAction::SetQuantity {
                        product_id: line.product.id.clone(),
                        quantity: line.quantity - DEFAULT_ADD_QUANTITY,
                    }));
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(line) = selected {
                    dispatcher.dispatch(Action::Cart(CartAction::Remove {
                        product_id: line.product.id.clone(),
                    }));
                }
            }
            KeyCode::Char('X') => dispatcher.dispatch(Action::Cart(CartAction::Clear)),
            KeyCode::Enter | KeyCode::Char('p') => {
                if !state.cart.is_empty() {
                    dispatcher
                        .dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Checkout)));
                }
            }
            _ => {}
        }
    }

    fn checkout_key(&self, key: KeyEvent, dispatcher: &Dispatcher) {
        match key.code {
            KeyCode::Esc => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Cart)))
            }
            KeyCode::Tab => dispatcher.dispatch(Action::Checkout(CheckoutAction::FormNextField)),
            KeyCode::Enter => dispatcher.dispatch(Action::Checkout(CheckoutAction::Submit)),
            KeyCode::Backspace => {
                dispatcher.dispatch(Action::Checkout(CheckoutAction::FormBackspace))
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatcher.dispatch(Action::Checkout(CheckoutAction::CyclePayment))
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatcher.dispatch(Action::Checkout(CheckoutAction::FormChar(c)))
            }
            _ => {}
        }
    }

    fn login_key(&self, key: KeyEvent, dispatcher: &Dispatcher) {
        match key.code {
            KeyCode::Esc => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Menu)))
            }
            KeyCode::Tab => dispatcher.dispatch(Action::Session(SessionAction::FormNextField)),
            KeyCode::Enter => dispatcher.dispatch(Action::Session(SessionAction::Submit)),
            KeyCode::Backspace => {
                dispatcher.dispatch(Action::Session(SessionAction::FormBackspace))
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatcher.dispatch(Action::Session(SessionAction::ToggleMode))
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatcher.dispatch(Action::Session(SessionAction::FormChar(c)))
            }
            _ => {}
        }
    }

    fn orders_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let selected = state.orders.selected_order();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Menu)))
            }
            KeyCode::Char('q') => dispatcher.dispatch(Action::Global(GlobalAction::Quit)),
            KeyCode::Down | KeyCode::Char('j') => {
                dispatcher.dispatch(Action::Order(OrderAction::SelectNext))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                dispatcher.dispatch(Action::Order(OrderAction::SelectPrevious))
            }
            KeyCode::Char('r') => dispatcher.dispatch(Action::Order(OrderAction::FetchList)),
            KeyCode::Enter | KeyCode::Char('t') => {
                if let Some(order) = selected {
                    dispatcher.dispatch(Action::Order(OrderAction::Track {
                        id: order.id.clone(),
                    }));
                    dispatcher
                        .dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Tracking)));
                }
            }
            KeyCode::Char('x') => {
                // The cancel affordance only exists while the status allows it
                if let Some(order) = selected {
                    if order.status.can_cancel() {
                        dispatcher.dispatch(Action::Order(OrderAction::Cancel {
                            id: order.id.clone(),
                        }));
                    }
                }
            }
            _ => {}
        }
    }

    fn tracking_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('o') => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Orders)))
            }
            KeyCode::Char('r') => {
                if let Some(order) = &state.orders.tracked {
                    dispatcher.dispatch(Action::Order(OrderAction::Track {
                        id: order.id.clone(),
                    }));
                }
            }
            KeyCode::Char('x') => {
                if let Some(order) = &state.orders.tracked {
                    if order.status.can_cancel() {
                        dispatcher.dispatch(Action::Order(OrderAction::Cancel {
                            id: order.id.clone(),
                        }));
                    }
                }
            }
            _ => {}
        }
    }

    fn confirmation_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Menu)))
            }
            KeyCode::Char('t') => {
                if let Some(order) = &state.orders.last_placed {
                    dispatcher.dispatch(Action::Order(OrderAction::Track {
                        id: order.id.clone(),
                    }));
                    dispatcher
                        .dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Tracking)));
                }
            }
            _ => {}
        }
    }

    fn dashboard_key(&self, key: KeyEvent, dispatcher: &Dispatcher) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Menu)))
            }
            KeyCode::Char('q') => dispatcher.dispatch(Action::Global(GlobalAction::Quit)),
            KeyCode::Char('r') => dispatcher.dispatch(Action::Order(OrderAction::FetchStats)),
            KeyCode::Char('o') => {
                dispatcher
                    .dispatch(Action::Global(GlobalAction::ShowScreen(Screen::AdminOrders)));
                dispatcher.dispatch(Action::Order(OrderAction::FetchList));
            }
            KeyCode::Char('p') => {
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(
                    Screen::AdminProducts,
                )));
                dispatcher.dispatch(Action::Catalog(CatalogAction::FetchAdmin));
            }
            _ => {}
        }
    }

    fn admin_orders_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let selected = state.orders.selected_order();
        match key.code {
            KeyCode::Esc => dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(
                Screen::AdminDashboard,
            ))),
            KeyCode::Down | KeyCode::Char('j') => {
                dispatcher.dispatch(Action::Order(OrderAction::SelectNext))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                dispatcher.dispatch(Action::Order(OrderAction::SelectPrevious))
            }
            KeyCode::Char('r') => dispatcher.dispatch(Action::Order(OrderAction::FetchList)),
            // Digits assign a status straight from the fixed status set
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(order) = selected {
                    let idx = c as usize - '1' as usize;
                    let status = OrderStatus::ALL[idx];
                    if !order.status.is_terminal() && order.status != status {
                        dispatcher.dispatch(Action::Order(OrderAction::UpdateStatus {
                            id: order.id.clone(),
                            status,
                        }));
                    }
                }
            }
            _ => {}
        }
    }

    fn admin_products_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // An open form captures the keyboard
        if state.catalog.form.is_some() {
            match key.code {
                KeyCode::Esc => dispatcher.dispatch(Action::Catalog(CatalogAction::CloseForm)),
                KeyCode::Tab => dispatcher.dispatch(Action::Catalog(CatalogAction::FormNextField)),
                KeyCode::Enter => dispatcher.dispatch(Action::Catalog(CatalogAction::FormSubmit)),
                KeyCode::Backspace => {
                    dispatcher.dispatch(Action::Catalog(CatalogAction::FormBackspace))
                }
                KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    dispatcher.dispatch(Action::Catalog(CatalogAction::FormCycleCategory))
                }
                KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    dispatcher.dispatch(Action::Catalog(CatalogAction::FormToggleAvailable))
                }
                KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    dispatcher.dispatch(Action::Catalog(CatalogAction::FormToggleSpecial))
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    dispatcher.dispatch(Action::Catalog(CatalogAction::FormChar(c)))
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(
                Screen::AdminDashboard,
            ))),
            KeyCode::Down | KeyCode::Char('j') => {
                dispatcher.dispatch(Action::Catalog(CatalogAction::SelectNext))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                dispatcher.dispatch(Action::Catalog(CatalogAction::SelectPrevious))
            }
            KeyCode::Char('n') => dispatcher.dispatch(Action::Catalog(CatalogAction::OpenCreateForm)),
            KeyCode::Char('e') | KeyCode::Enter => {
                dispatcher.dispatch(Action::Catalog(CatalogAction::OpenEditForm))
            }
            KeyCode::Char('x') => {
                if let Some(product) = state.catalog.selected_product() {
                    dispatcher.dispatch(Action::Catalog(CatalogAction::Delete {
                        id: product.id.clone(),
                    }));
                }
            }
            KeyCode::Char('r') => dispatcher.dispatch(Action::Catalog(CatalogAction::FetchAdmin)),
            _ => {}
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coop_client::{Category, Product, Role, User};
    use std::sync::mpsc;

    fn press(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        )))
    }

    fn harness() -> (KeyboardMiddleware, Dispatcher, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (KeyboardMiddleware::new(), Dispatcher::new(tx), rx)
    }

    fn menu_with_product() -> AppState {
        let mut state = AppState::new();
        state.catalog.products = vec![Product {
            id: "p1".to_string(),
            name: "Wings".to_string(),
            category: Category::Wings,
            price: 180.0,
            unit: "kg".to_string(),
            description: String::new(),
            image: String::new(),
            available: true,
            is_special: false,
        }];
        state
    }

    #[test]
    fn key_events_are_consumed() {
        let (mut mw, d, _rx) = harness();
        assert!(!mw.handle(&press(KeyCode::Char('j')), &AppState::new(), &d));
        assert!(mw.handle(&Action::Global(GlobalAction::Quit), &AppState::new(), &d));
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let (mut mw, d, rx) = harness();
        let mut state = AppState::new();
        state.screen = Screen::Checkout;

        mw.handle(
            &Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
            &state,
            &d,
        );

        assert!(matches!(rx.try_recv(), Ok(Action::Global(GlobalAction::Quit))));
    }

    #[test]
    fn menu_enter_adds_the_selected_product_with_default_quantity() {
        let (mut mw, d, rx) = harness();
        let state = menu_with_product();

        mw.handle(&press(KeyCode::Enter), &state, &d);

        match rx.try_recv() {
            Ok(Action::Cart(CartAction::Add { product, quantity })) => {
                assert_eq!(product.id, "p1");
                assert_eq!(quantity, DEFAULT_ADD_QUANTITY);
            }
            other => panic!("expected cart add, got {other:?}"),
        }
    }

    #[test]
    fn login_screen_routes_characters_into_the_form() {
        let (mut mw, d, rx) = harness();
        let mut state = AppState::new();
        state.screen = Screen::Login;

        mw.handle(&press(KeyCode::Char('q')), &state, &d);

        // 'q' types into the form instead of quitting
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Session(SessionAction::FormChar('q')))
        ));
    }

    #[test]
    fn cancel_key_is_inert_for_terminal_orders() {
        use chrono::Utc;
        use coop_client::{Order, PaymentMethod};

        let (mut mw, d, rx) = harness();
        let mut state = AppState::new();
        state.screen = Screen::Orders;
        state.orders.list = vec![Order {
            id: "o1".to_string(),
            customer_name: "Asha".to_string(),
            phone: "9".to_string(),
            delivery_address: "addr".to_string(),
            delivery_location: None,
            payment_method: PaymentMethod::CashOnDelivery,
            notes: String::new(),
            items: vec![],
            total_amount: 1.0,
            status: OrderStatus::Delivered,
            created_at: Utc::now(),
        }];

        mw.handle(&press(KeyCode::Char('x')), &state, &d);
        assert!(rx.try_recv().is_err());

        state.orders.list[0].status = OrderStatus::Pending;
        mw.handle(&press(KeyCode::Char('x')), &state, &d);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Order(OrderAction::Cancel { id })) if id == "o1"
        ));
    }

    #[test]
    fn admin_digit_keys_assign_statuses_from_the_fixed_set() {
        use chrono::Utc;
        use coop_client::{Order, PaymentMethod};

        let (mut mw, d, rx) = harness();
        let mut state = AppState::new();
        state.screen = Screen::AdminOrders;
        state.session.user = Some(User {
            id: "u1".to_string(),
            name: "Admin".to_string(),
            email: "a@b.c".to_string(),
            phone: String::new(),
            address: String::new(),
            role: Role::Admin,
        });
        state.orders.list = vec![Order {
            id: "o1".to_string(),
            customer_name: "Asha".to_string(),
            phone: "9".to_string(),
            delivery_address: "addr".to_string(),
            delivery_location: None,
            payment_method: PaymentMethod::CashOnDelivery,
            notes: String::new(),
            items: vec![],
            total_amount: 1.0,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }];

        mw.handle(&press(KeyCode::Char('2')), &state, &d);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Order(OrderAction::UpdateStatus { status: OrderStatus::Preparing, .. }))
        ));
    }
}
