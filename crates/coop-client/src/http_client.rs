//! reqwest-backed implementation of [`StorefrontApi`]
//!
//! Response bodies are always read as text first and parsed opportunistically
//! so that a backend returning HTML or an empty body never raises a parse
//! fault; see [`crate::error::normalize_error_body`].

use crate::client::{ApiResult, StorefrontApi};
use crate::error::{normalize_error_body, ApiError};
use crate::types::{
    AuthResponse, Order, OrderInput, OrderStats, OrderStatus, Product, ProductInput, User,
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

/// Production API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client against a base URL like `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = builder.send().await?;
        read_json(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::GET, path, token)).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::POST, path, token).json(body))
            .await
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let mut builder = self.request(Method::PUT, path, token);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send_json(builder).await
    }
}

/// Read a response as text, then parse the success shape or normalize the
/// error message
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let text = response.text().await?;
    if status.is_success() {
        serde_json::from_str(&text).map_err(|err| {
            log::warn!("Malformed success body (status {}): {}", status, err);
            ApiError::Decode(err)
        })
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            message: normalize_error_body(status.as_u16(), &text),
        })
    }
}

#[async_trait]
impl StorefrontApi for HttpApiClient {
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        self.post_json(
            "/api/auth/login",
            None,
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> ApiResult<AuthResponse> {
        self.post_json(
            "/api/auth/signup",
            None,
            &json!({ "name": name, "email": email, "password": password, "phone": phone }),
        )
        .await
    }

    async fn current_user(&self, token: &str) -> ApiResult<User> {
        self.get_json("/api/auth/me", Some(token)).await
    }

    async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
        self.get_json("/api/products", None).await
    }

    async fn fetch_all_products(&self, token: &str) -> ApiResult<Vec<Product>> {
        self.get_json("/api/products/all", Some(token)).await
    }

    async fn create_product(&self, token: &str, input: &ProductInput) -> ApiResult<Product> {
        self.post_json("/api/products", Some(token), input).await
    }

    async fn update_product(
        &self,
        token: &str,
        id: &str,
        input: &ProductInput,
    ) -> ApiResult<Product> {
        self.put_json(&format!("/api/products/{id}"), Some(token), Some(input))
            .await
    }

    async fn delete_product(&self, token: &str, id: &str) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, &format!("/api/products/{id}"), Some(token));
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message: normalize_error_body(status.as_u16(), &text),
            })
        }
    }

    async fn create_order(&self, token: &str, input: &OrderInput) -> ApiResult<Order> {
        self.post_json("/api/orders", Some(token), input).await
    }

    async fn fetch_orders(&self, token: &str) -> ApiResult<Vec<Order>> {
        self.get_json("/api/orders", Some(token)).await
    }

    async fn fetch_order(&self, token: &str, id: &str) -> ApiResult<Order> {
        self.get_json(&format!("/api/orders/{id}"), Some(token)).await
    }

    async fn fetch_order_stats(&self, token: &str) -> ApiResult<OrderStats> {
        self.get_json("/api/orders/stats", Some(token)).await
    }

    async fn update_order_status(
        &self,
        token: &str,
        id: &str,
        status: OrderStatus,
    ) -> ApiResult<Order> {
        self.put_json(
            &format!("/api/orders/{id}/status"),
            Some(token),
            Some(&json!({ "status": status })),
        )
        .await
    }

    async fn cancel_order(&self, token: &str, id: &str) -> ApiResult<Order> {
        self.put_json::<(), Order>(&format!("/api/orders/{id}/cancel"), Some(token), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = HttpApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
