//! REST API client for the Coop storefront backend
//!
//! This crate provides a trait-based client for the storefront REST API.
//! The backend owns every entity; this crate only moves wire shapes and
//! normalizes failures into message strings the UI can show inline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             StorefrontApi trait              │
//! │  - login() / signup() / current_user()       │
//! │  - fetch_products() / mutations              │
//! │  - create/fetch/cancel orders, stats         │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!              ┌─────────────────┐
//!              │  HttpApiClient  │
//!              │  (reqwest)      │
//!              └─────────────────┘
//! ```
//!
//! Authentication is per-call: the bearer token lives in the caller's session
//! state, never in the client.

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::{ApiResult, StorefrontApi};
pub use error::{normalize_error_body, ApiError};
pub use http_client::HttpApiClient;
pub use types::{
    AuthResponse, Category, GeoPoint, Order, OrderInput, OrderItem, OrderStats, OrderStatus,
    PaymentMethod, Product, ProductInput, Role, User,
};
