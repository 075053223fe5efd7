//! API client for the FullSlate scheduling service.
//!
//! This module provides the `FullSlate` struct for fetching employees,
//! services, openings, bookings, clients, events, products and vouchers
//! from a company's FullSlate account.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{
    Booking, BookingRequest, ClientRecord, ClientsQuery, Employee, Event, EventsQuery,
    OpeningsQuery, OpeningsResponse, Product, Service, Voucher,
};
use crate::Result;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// FullSlate API path template; `{key}` is replaced with the company key
/// at construction
const API_PATH_TEMPLATE: &str = "https://{key}.fullslate.com/api/";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// FullSlate API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct FullSlate {
    key: String,
    token: Option<String>,
    base_url: String,
    client: Client,
}

impl FullSlate {
    /// Create a client for the public resources of `{key}.fullslate.com`.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        Self::builder(key).build()
    }

    /// Create a client holding an API token, required for the private
    /// company resources (clients, events, products, vouchers).
    pub fn with_token(key: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::builder(key).token(token).build()
    }

    /// Start building a client with non-default settings.
    pub fn builder(key: impl Into<String>) -> FullSlateBuilder {
        FullSlateBuilder {
            key: key.into(),
            token: None,
            base_url: None,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    /// The company key this client was built for.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The API token, if one was configured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ===== Resource methods =====

    /// Fetch all employees.
    pub async fn employees(&self) -> Result<Vec<Employee>> {
        self.get("employees", &self.auth_pairs()).await
    }

    /// Fetch a single employee.
    pub async fn employee(&self, id: i64) -> Result<Employee> {
        self.get(&format!("employees/{}", id), &self.auth_pairs())
            .await
    }

    /// Fetch all services.
    pub async fn services(&self) -> Result<Vec<Service>> {
        self.get("services", &self.auth_pairs()).await
    }

    /// Fetch a single service.
    pub async fn service(&self, id: i64) -> Result<Service> {
        self.get(&format!("services/{}", id), &self.auth_pairs())
            .await
    }

    /// Search bookable openings for one or more services.
    ///
    /// At least one service id is required. The ids are sent comma-joined
    /// under a single `services[]` parameter, which is the encoding the
    /// endpoint expects.
    pub async fn openings(
        &self,
        services: &[i64],
        query: &OpeningsQuery,
    ) -> Result<OpeningsResponse> {
        if services.is_empty() {
            return Err(ApiError::MissingServices);
        }

        let ids = services
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut params = self.auth_pairs();
        params.extend(query.query_pairs());
        params.push(("services[]", ids));

        self.get("openings", &params).await
    }

    /// Fetch a single booking by its code.
    ///
    /// The booking endpoints are public and carry no `auth` parameter.
    pub async fn booking(&self, id: &str) -> Result<Booking> {
        if id.trim().is_empty() {
            return Err(ApiError::MissingBookingId);
        }

        self.get(&format!("bookings/{}", id), &[]).await
    }

    /// Create a booking.
    ///
    /// Blank names are rejected before any network activity; everything
    /// else is left to the server, which reports problems through its
    /// failure flag.
    pub async fn book(&self, request: &BookingRequest) -> Result<Booking> {
        if request.first_name.trim().is_empty() {
            return Err(ApiError::InvalidBooking("first name"));
        }
        if request.last_name.trim().is_empty() {
            return Err(ApiError::InvalidBooking("last name"));
        }

        self.post("bookings", request).await
    }

    /// Fetch all client records. Requires an API token.
    pub async fn clients(&self, query: &ClientsQuery) -> Result<Vec<ClientRecord>> {
        self.require_token()?;

        let mut params = self.auth_pairs();
        params.extend(query.query_pairs());

        self.get("clients", &params).await
    }

    /// Fetch a single client record. Requires an API token.
    pub async fn client(&self, id: i64, query: &ClientsQuery) -> Result<ClientRecord> {
        self.require_token()?;

        let mut params = self.auth_pairs();
        params.extend(query.query_pairs());

        self.get(&format!("clients/{}", id), &params).await
    }

    /// Fetch the company schedule. Requires an API token.
    pub async fn events(&self, query: &EventsQuery) -> Result<Vec<Event>> {
        self.require_token()?;

        let mut params = self.auth_pairs();
        params.extend(query.query_pairs());

        self.get("events", &params).await
    }

    /// Fetch a single event. Requires an API token.
    pub async fn event(&self, id: &str, query: &EventsQuery) -> Result<Event> {
        self.require_token()?;

        let mut params = self.auth_pairs();
        params.extend(query.query_pairs());

        self.get(&format!("events/{}", id), &params).await
    }

    /// Fetch all products. Requires an API token.
    pub async fn products(&self) -> Result<Vec<Product>> {
        self.require_token()?;
        self.get("products", &self.auth_pairs()).await
    }

    /// Fetch a single product. Requires an API token.
    pub async fn product(&self, id: i64) -> Result<Product> {
        self.require_token()?;
        self.get(&format!("products/{}", id), &self.auth_pairs())
            .await
    }

    /// Fetch all vouchers. Requires an API token.
    pub async fn vouchers(&self) -> Result<Vec<Voucher>> {
        self.require_token()?;
        self.get("vouchers", &self.auth_pairs()).await
    }

    /// Fetch a single voucher. Requires an API token.
    pub async fn voucher(&self, id: i64) -> Result<Voucher> {
        self.require_token()?;
        self.get(&format!("vouchers/{}", id), &self.auth_pairs())
            .await
    }

    // ===== Transport =====

    fn require_token(&self) -> Result<()> {
        if self.token.is_none() {
            return Err(ApiError::MissingToken);
        }
        Ok(())
    }

    /// The `auth` query parameter, when a token is configured.
    fn auth_pairs(&self) -> Vec<(&'static str, String)> {
        match &self.token {
            Some(token) => vec![("auth", token.clone())],
            None => Vec::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self.client.get(&url).query(query).send().await?;
        Self::interpret(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        Self::interpret(response).await
    }

    /// Interpret a FullSlate response. The body's failure flag outranks the
    /// HTTP status, which outranks decoding - the service reports most
    /// application errors as `failure: true` inside a 200 response.
    async fn interpret<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let text = response.text().await?;
        debug!(status = %status, "response received");

        if let Ok(body) = serde_json::from_str::<FailureBody>(&text) {
            if body.failure {
                let message = body
                    .error_message
                    .unwrap_or_else(|| "FullSlate request failed".to_string());
                warn!(status = %status, message = %message, "API reported failure");
                return Err(ApiError::Failure { message });
            }
        }

        if !status.is_success() {
            return Err(ApiError::from_status(status, &text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Builder for [`FullSlate`] clients.
#[derive(Clone)]
pub struct FullSlateBuilder {
    key: String,
    token: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
}

impl FullSlateBuilder {
    /// Set the API token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Point the client at a different base URL. Intended for fixture
    /// backends in tests; the company key is still required.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<FullSlate> {
        if self.key.trim().is_empty() {
            return Err(ApiError::MissingKey);
        }

        let mut base_url = self
            .base_url
            .unwrap_or_else(|| API_PATH_TEMPLATE.replace("{key}", &self.key));
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let client = Client::builder().timeout(self.timeout).build()?;

        Ok(FullSlate {
            key: self.key,
            token: self.token,
            base_url,
            client,
        })
    }
}

// Internal response types for parsing

/// Failure envelope FullSlate wraps application errors in.
#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    failure: bool,
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}
