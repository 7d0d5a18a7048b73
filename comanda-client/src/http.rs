//! HTTP client for the restaurant REST API
//!
//! Thin typed wrapper over the backend endpoints. Calls fail fast and
//! leave no client-side state behind; retry policy belongs to the caller.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{ErrorBody, LoginRequest, LoginResponse};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, Order, Table, TableDetails};

/// HTTP client for making network requests to the backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.request(method, self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        request
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body, discarding the response body
    pub async fn post_empty(&self, path: &str) -> ClientResult<()> {
        let response = self.request(reqwest::Method::POST, path).send().await?;
        Self::handle_empty(response).await
    }

    /// Make a PUT request without body, discarding the response body
    pub async fn put_empty(&self, path: &str) -> ClientResult<()> {
        let response = self.request(reqwest::Method::PUT, path).send().await?;
        Self::handle_empty(response).await
    }

    /// Make a DELETE request, discarding the response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::handle_empty(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::map_error(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle a response whose body is irrelevant
    async fn handle_empty(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::map_error(status, text));
        }

        Ok(())
    }

    fn map_error(status: StatusCode, body: String) -> ClientError {
        // The backend wraps failures as { "message": ... }; fall back to
        // the raw body when it does not.
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Rejected(message)
            }
            _ => ClientError::Internal(message),
        }
    }

    // ========== Auth API ==========

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.post("/auth/login", &request).await
    }

    // ========== Tables API ==========

    /// List all tables
    pub async fn tables(&self) -> ClientResult<Vec<Table>> {
        self.get("/tables").await
    }

    /// Fetch a table's detail: the table, its active session, its orders
    pub async fn table_details(&self, table_id: i64) -> ClientResult<TableDetails> {
        self.get(&format!("/tables/{}/details", table_id)).await
    }

    /// End a table's active session
    pub async fn end_session(&self, token: &str) -> ClientResult<()> {
        self.post_empty(&format!("/sessions/end/{}", token)).await
    }

    // ========== Orders API ==========

    /// List orders
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/orders").await
    }

    /// List orders with a row limit and sort key
    pub async fn orders_with(&self, limit: u32, sort: &str) -> ClientResult<Vec<Order>> {
        self.get(&format!("/orders?limit={}&sort={}", limit, sort))
            .await
    }

    /// Mark an order served
    pub async fn serve_order(&self, order_id: i64) -> ClientResult<()> {
        self.put_empty(&format!("/orders/{}/serve", order_id)).await
    }

    /// Mark an order paid
    pub async fn pay_order(&self, order_id: i64) -> ClientResult<()> {
        self.put_empty(&format!("/orders/{}/pay", order_id)).await
    }

    /// Confirm a pending order
    pub async fn confirm_order(&self, order_id: i64) -> ClientResult<()> {
        self.post_empty(&format!("/orders/{}/confirm", order_id))
            .await
    }

    // ========== Menu API ==========

    /// List the menu catalog
    pub async fn menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("/menu").await
    }

    /// Create a menu item
    pub async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        self.post("/menu", payload).await
    }

    /// Update a menu item
    pub async fn update_menu_item(
        &self,
        item_id: i64,
        payload: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        self.put(&format!("/menu/{}", item_id), payload).await
    }

    /// Delete a menu item
    pub async fn delete_menu_item(&self, item_id: i64) -> ClientResult<()> {
        self.delete(&format!("/menu/{}", item_id)).await
    }
}
