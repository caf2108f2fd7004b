//! Backend API Middleware
//!
//! Central middleware for all backend REST interactions: credential exchange,
//! identity verification, catalog fetches and admin mutations, order
//! placement, tracking, aggregates, and status transitions.
//!
//! Request actions are consumed here; each spawned task dispatches exactly one
//! completion action (fulfilled or rejected) back through the chain. Error
//! messages arrive already normalized by the client crate.

use crate::actions::{
    Action, CatalogAction, GlobalAction, OrderAction, SessionAction, StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, NoticeTopic, Screen};
use coop_client::StorefrontApi;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all backend API operations
pub struct ApiMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    api: Arc<dyn StorefrontApi>,
}

impl ApiMiddleware {
    pub fn new(api: Arc<dyn StorefrontApi>) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self { runtime, api })
    }

    /// Bearer token, or dispatch the rejection for an auth-required request
    fn require_token(
        &self,
        state: &AppState,
        dispatcher: &Dispatcher,
        reject: impl FnOnce(String) -> Action,
    ) -> Option<String> {
        match state.session.token.clone() {
            Some(token) => Some(token),
            None => {
                dispatcher.dispatch(reject("Not authenticated".to_string()));
                None
            }
        }
    }

    fn submit_credentials(&self, state: &AppState, dispatcher: &Dispatcher) {
        let form = state.session.form.clone();

        // A pasted token skips the credential exchange entirely; it is
        // adopted and verified like the persisted one at startup
        let pasted = form.token.trim();
        if form.mode == crate::state::AuthMode::Login && !pasted.is_empty() {
            dispatcher.dispatch(Action::Session(SessionAction::AdoptToken(
                pasted.to_string(),
            )));
            dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Menu)));
            return;
        }

        if form.email.trim().is_empty() || form.password.is_empty() {
            dispatcher.dispatch(Action::Session(SessionAction::Failed(
                "Email and password are required".to_string(),
            )));
            return;
        }
        if form.mode == crate::state::AuthMode::Signup && form.name.trim().is_empty() {
            dispatcher.dispatch(Action::Session(SessionAction::Failed(
                "Name is required".to_string(),
            )));
            return;
        }

        dispatcher.dispatch(Action::Session(SessionAction::Pending));

        let api = Arc::clone(&self.api);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let result = match form.mode {
                crate::state::AuthMode::Login => api.login(form.email.trim(), &form.password).await,
                crate::state::AuthMode::Signup => {
                    api.signup(
                        form.name.trim(),
                        form.email.trim(),
                        &form.password,
                        form.phone.trim(),
                    )
                    .await
                }
            };
            match result {
                Ok(auth) => {
                    dispatcher.dispatch(Action::Session(SessionAction::Authenticated {
                        user: auth.user,
                        token: auth.token,
                    }));
                    dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Menu)));
                }
                Err(e) => dispatcher.dispatch(Action::Session(SessionAction::Failed(e.to_string()))),
            }
        });
    }

    fn fetch_current_user(&self, token: String, dispatcher: &Dispatcher) {
        let api = Arc::clone(&self.api);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match api.current_user(&token).await {
                Ok(user) => {
                    dispatcher.dispatch(Action::Session(SessionAction::CurrentUserLoaded(user)))
                }
                Err(e) => dispatcher
                    .dispatch(Action::Session(SessionAction::CurrentUserFailed(e.to_string()))),
            }
        });
    }

    fn spawn_catalog_fetch(&self, token: Option<String>, dispatcher: &Dispatcher) {
        let api = Arc::clone(&self.api);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let result = match &token {
                Some(token) => api.fetch_all_products(token).await,
                None => api.fetch_products().await,
            };
            match result {
                Ok(products) => dispatcher.dispatch(Action::Catalog(CatalogAction::Loaded(products))),
                Err(e) => {
                    dispatcher.dispatch(Action::Catalog(CatalogAction::LoadFailed(e.to_string())))
                }
            }
        });
    }

    /// Translate a validated product form into a create or update request
    fn submit_product_form(&self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(form) = state.catalog.form.as_ref() else {
            return;
        };
        let Some(input) = form.to_input() else {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                NoticeTopic::Catalog,
                "Product needs a name and a positive price",
            )));
            return;
        };
        match form.editing_id.clone() {
            Some(id) => dispatcher.dispatch(Action::Catalog(CatalogAction::Update { id, input })),
            None => dispatcher.dispatch(Action::Catalog(CatalogAction::Create(input))),
        }
        dispatcher.dispatch(Action::Catalog(CatalogAction::CloseForm));
    }

    fn handle_catalog(
        &self,
        action: &CatalogAction,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) -> bool {
        match action {
            CatalogAction::FetchPublic => {
                self.spawn_catalog_fetch(None, dispatcher);
                true
            }

            CatalogAction::FetchAdmin => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Catalog(CatalogAction::LoadFailed(m))
                }) else {
                    return false;
                };
                self.spawn_catalog_fetch(Some(token), dispatcher);
                true
            }

            CatalogAction::FormSubmit => {
                self.submit_product_form(state, dispatcher);
                false
            }

            CatalogAction::Create(input) => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Catalog(CatalogAction::MutationFailed(m))
                }) else {
                    return false;
                };
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                let input = input.clone();
                self.runtime.spawn(async move {
                    match api.create_product(&token, &input).await {
                        Ok(product) => {
                            dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                                NoticeTopic::Catalog,
                                format!("Added {}", product.name),
                            )));
                            dispatcher.dispatch(Action::Catalog(CatalogAction::Upserted(product)));
                        }
                        Err(e) => dispatcher
                            .dispatch(Action::Catalog(CatalogAction::MutationFailed(e.to_string()))),
                    }
                });
                true
            }

            CatalogAction::Update { id, input } => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Catalog(CatalogAction::MutationFailed(m))
                }) else {
                    return false;
                };
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                let id = id.clone();
                let input = input.clone();
                self.runtime.spawn(async move {
                    match api.update_product(&token, &id, &input).await {
                        Ok(product) => {
                            dispatcher.dispatch(Action::Catalog(CatalogAction::Upserted(product)))
                        }
                        Err(e) => dispatcher
                            .dispatch(Action::Catalog(CatalogAction::MutationFailed(e.to_string()))),
                    }
                });
                true
            }

            CatalogAction::Delete { id } => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Catalog(CatalogAction::MutationFailed(m))
                }) else {
                    return false;
                };
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                let id = id.clone();
                self.runtime.spawn(async move {
                    match api.delete_product(&token, &id).await {
                        Ok(()) => dispatcher.dispatch(Action::Catalog(CatalogAction::Removed { id })),
                        Err(e) => dispatcher
                            .dispatch(Action::Catalog(CatalogAction::MutationFailed(e.to_string()))),
                    }
                });
                true
            }

            _ => true,
        }
    }

    fn handle_order(
        &self,
        action: &OrderAction,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) -> bool {
        match action {
            OrderAction::Place(input) => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Order(OrderAction::PlaceFailed(m))
                }) else {
                    return false;
                };
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::busy(
                    NoticeTopic::Order,
                    "Placing order...",
                )));
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                let input = input.clone();
                self.runtime.spawn(async move {
                    match api.create_order(&token, &input).await {
                        Ok(order) => dispatcher.dispatch(Action::Order(OrderAction::Placed(order))),
                        Err(e) => dispatcher
                            .dispatch(Action::Order(OrderAction::PlaceFailed(e.to_string()))),
                    }
                });
                true
            }

            // Placement fulfilled: clear the cart and show the confirmation
            OrderAction::Placed(order) => {
                dispatcher.dispatch(Action::Cart(crate::actions::CartAction::Clear));
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    NoticeTopic::Order,
                    format!("Order #{} placed", order.short_ref()),
                )));
                dispatcher.dispatch(Action::Global(GlobalAction::ShowScreen(Screen::Confirmation)));
                true
            }

            OrderAction::FetchList => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Order(OrderAction::ListFailed(m))
                }) else {
                    return false;
                };
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                self.runtime.spawn(async move {
                    match api.fetch_orders(&token).await {
                        Ok(orders) => {
                            dispatcher.dispatch(Action::Order(OrderAction::ListLoaded(orders)))
                        }
                        Err(e) => dispatcher
                            .dispatch(Action::Order(OrderAction::ListFailed(e.to_string()))),
                    }
                });
                true
            }

            OrderAction::Track { id } => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Order(OrderAction::TrackedFailed(m))
                }) else {
                    return false;
                };
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                let id = id.clone();
                self.runtime.spawn(async move {
                    match api.fetch_order(&token, &id).await {
                        Ok(order) => {
                            dispatcher.dispatch(Action::Order(OrderAction::TrackedLoaded(order)))
                        }
                        Err(e) => dispatcher
                            .dispatch(Action::Order(OrderAction::TrackedFailed(e.to_string()))),
                    }
                });
                true
            }

            OrderAction::FetchStats => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Order(OrderAction::StatsFailed(m))
                }) else {
                    return false;
                };
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                self.runtime.spawn(async move {
                    match api.fetch_order_stats(&token).await {
                        Ok(stats) => {
                            dispatcher.dispatch(Action::Order(OrderAction::StatsLoaded(stats)))
                        }
                        Err(e) => dispatcher
                            .dispatch(Action::Order(OrderAction::StatsFailed(e.to_string()))),
                    }
                });
                true
            }

            OrderAction::UpdateStatus { id, status } => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Order(OrderAction::PatchFailed(m))
                }) else {
                    return false;
                };
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                let id = id.clone();
                let status = *status;
                self.runtime.spawn(async move {
                    match api.update_order_status(&token, &id, status).await {
                        Ok(order) => {
                            dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                                NoticeTopic::Order,
                                format!("Order #{} -> {}", order.short_ref(), order.status.label()),
                            )));
                            dispatcher.dispatch(Action::Order(OrderAction::Patched(order)));
                        }
                        Err(e) => dispatcher
                            .dispatch(Action::Order(OrderAction::PatchFailed(e.to_string()))),
                    }
                });
                true
            }

            OrderAction::Cancel { id } => {
                let Some(token) = self.require_token(state, dispatcher, |m| {
                    Action::Order(OrderAction::PatchFailed(m))
                }) else {
                    return false;
                };
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                let id = id.clone();
                self.runtime.spawn(async move {
                    match api.cancel_order(&token, &id).await {
                        Ok(order) => {
                            dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                                NoticeTopic::Order,
                                format!("Order #{} cancelled", order.short_ref()),
                            )));
                            dispatcher.dispatch(Action::Order(OrderAction::Patched(order)));
                        }
                        Err(e) => dispatcher
                            .dispatch(Action::Order(OrderAction::PatchFailed(e.to_string()))),
                    }
                });
                true
            }

            _ => true,
        }
    }
}

impl Middleware for ApiMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // Kick off the public catalog fetch at startup
            Action::Global(GlobalAction::Bootstrap) => {
                dispatcher.dispatch(Action::Catalog(CatalogAction::FetchPublic));
                true
            }

            Action::Session(SessionAction::Submit) => {
                self.submit_credentials(state, dispatcher);
                false
            }

            Action::Session(SessionAction::FetchCurrentUser) => {
                // SessionMiddleware guarantees a token is present here
                if let Some(token) = state.session.token.clone() {
                    self.fetch_current_user(token, dispatcher);
                }
                true
            }

            Action::Catalog(catalog) => self.handle_catalog(catalog, state, dispatcher),

            Action::Order(order) => self.handle_order(order, state, dispatcher),

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use coop_client::{
        ApiError, ApiResult, AuthResponse, Order, OrderInput, OrderStats, OrderStatus, Product,
        ProductInput, User,
    };
    use std::sync::mpsc;

    /// Stub client for paths that must never reach the network
    struct OfflineApi;

    fn offline() -> ApiError {
        ApiError::Transport("offline".to_string())
    }

    #[async_trait]
    impl StorefrontApi for OfflineApi {
        async fn login(&self, _: &str, _: &str) -> ApiResult<AuthResponse> {
            Err(offline())
        }
        async fn signup(&self, _: &str, _: &str, _: &str, _: &str) -> ApiResult<AuthResponse> {
            Err(offline())
        }
        async fn current_user(&self, _: &str) -> ApiResult<User> {
            Err(offline())
        }
        async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
            Err(offline())
        }
        async fn fetch_all_products(&self, _: &str) -> ApiResult<Vec<Product>> {
            Err(offline())
        }
        async fn create_product(&self, _: &str, _: &ProductInput) -> ApiResult<Product> {
            Err(offline())
        }
        async fn update_product(&self, _: &str, _: &str, _: &ProductInput) -> ApiResult<Product> {
            Err(offline())
        }
        async fn delete_product(&self, _: &str, _: &str) -> ApiResult<()> {
            Err(offline())
        }
        async fn create_order(&self, _: &str, _: &OrderInput) -> ApiResult<Order> {
            Err(offline())
        }
        async fn fetch_orders(&self, _: &str) -> ApiResult<Vec<Order>> {
            Err(offline())
        }
        async fn fetch_order(&self, _: &str, _: &str) -> ApiResult<Order> {
            Err(offline())
        }
        async fn fetch_order_stats(&self, _: &str) -> ApiResult<OrderStats> {
            Err(offline())
        }
        async fn update_order_status(
            &self,
            _: &str,
            _: &str,
            _: OrderStatus,
        ) -> ApiResult<Order> {
            Err(offline())
        }
        async fn cancel_order(&self, _: &str, _: &str) -> ApiResult<Order> {
            Err(offline())
        }
    }

    fn harness() -> (ApiMiddleware, Dispatcher, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let mw = ApiMiddleware::new(Arc::new(OfflineApi)).unwrap();
        (mw, Dispatcher::new(tx), rx)
    }

    #[test]
    fn pasted_token_is_adopted_instead_of_exchanged() {
        let (mut mw, dispatcher, rx) = harness();
        let mut state = AppState::new();
        state.session.form.token = "  browser-tok  ".to_string();

        let pass = mw.handle(&Action::Session(SessionAction::Submit), &state, &dispatcher);

        assert!(!pass);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Session(SessionAction::AdoptToken(t))) if t == "browser-tok"
        ));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Global(GlobalAction::ShowScreen(Screen::Menu)))
        ));
    }

    #[test]
    fn empty_credentials_are_rejected_before_any_request() {
        let (mut mw, dispatcher, rx) = harness();

        let pass = mw.handle(
            &Action::Session(SessionAction::Submit),
            &AppState::new(),
            &dispatcher,
        );

        assert!(!pass);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Session(SessionAction::Failed(_)))
        ));
    }
}
