//! Storefront API client trait
//!
//! Defines the interface for talking to the backend REST API. The production
//! implementation is [`crate::HttpApiClient`]; tests and middleware can
//! substitute their own implementation.

use crate::error::ApiError;
use crate::types::{
    AuthResponse, Order, OrderInput, OrderStats, OrderStatus, Product, ProductInput, User,
};
use async_trait::async_trait;

/// Result alias used across the client surface
pub type ApiResult<T> = Result<T, ApiError>;

/// Storefront API client trait
///
/// The client is stateless with respect to authentication: the bearer token
/// is owned by the session store and passed per call. Implementations must be
/// `Send + Sync` so they can be shared across async tasks.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    // === Auth ===

    /// Exchange credentials for a token and user profile
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse>;

    /// Register a new account
    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> ApiResult<AuthResponse>;

    /// Resolve the user behind a stored token
    ///
    /// A failure here means the token is not to be trusted; callers clear
    /// both token and user.
    async fn current_user(&self, token: &str) -> ApiResult<User>;

    // === Catalog ===

    /// Publicly browsable products (backend filters out unavailable ones)
    async fn fetch_products(&self) -> ApiResult<Vec<Product>>;

    /// Unfiltered product list for the admin panel
    async fn fetch_all_products(&self, token: &str) -> ApiResult<Vec<Product>>;

    async fn create_product(&self, token: &str, input: &ProductInput) -> ApiResult<Product>;

    async fn update_product(
        &self,
        token: &str,
        id: &str,
        input: &ProductInput,
    ) -> ApiResult<Product>;

    async fn delete_product(&self, token: &str, id: &str) -> ApiResult<()>;

    // === Orders ===

    async fn create_order(&self, token: &str, input: &OrderInput) -> ApiResult<Order>;

    /// The caller's order list (all orders when the token is an admin's)
    async fn fetch_orders(&self, token: &str) -> ApiResult<Vec<Order>>;

    async fn fetch_order(&self, token: &str, id: &str) -> ApiResult<Order>;

    async fn fetch_order_stats(&self, token: &str) -> ApiResult<OrderStats>;

    /// Admin status transition; returns the full updated order
    async fn update_order_status(
        &self,
        token: &str,
        id: &str,
        status: OrderStatus,
    ) -> ApiResult<Order>;

    /// Customer/admin cancellation; returns the full updated order
    async fn cancel_order(&self, token: &str, id: &str) -> ApiResult<Order>;
}
