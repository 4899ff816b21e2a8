//! # API Client
//!
//! Main HTTP client for expense API communication.
//!
//! Every authenticated call goes through [`ApiClient::authorized`], which reads the
//! session token, refuses to build a request without one, and attaches the
//! `Authorization: Bearer <token>` header. Responses go through one mapping step that
//! turns non-success statuses into [`ClientError::Api`] with the server's message.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{AuthResponse, Budget, Category, ErrorResponse, Transaction};

use super::transactions::TransactionForm;
use crate::config::ClientConfig;
use crate::core::error::{ClientError, Result};
use crate::core::service::ExpenseApi;
use crate::session::Session;

/// HTTP client for the expense tracker API.
///
/// Cheap to clone: clones share the connection pool and the [`Session`], so several
/// calls can be in flight at once.
#[derive(Clone, Debug)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client for the default local API.
    pub fn new(session: Session) -> Self {
        Self::with_base_url(crate::config::DEFAULT_API_URL, session)
    }

    /// Create a client from validated configuration.
    pub fn with_config(config: &ClientConfig, session: Session) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Create a client for an explicit base URL such as `http://127.0.0.1:8080/api`.
    pub fn with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request without credentials (login, register).
    pub(crate) fn public<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> RequestBuilder {
        self.client.request(method, self.url(path)).json(body)
    }

    /// Build an authenticated request.
    ///
    /// Fails with [`ClientError::MissingSession`] when no token is stored; in that case
    /// nothing is sent.
    pub(crate) fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = match self.session.token()? {
            Some(token) => token,
            None => {
                tracing::warn!(method = %method, path, "Request refused: no session token");
                return Err(ClientError::MissingSession);
            }
        };

        Ok(self
            .client
            .request(method, self.url(path))
            .bearer_auth(token))
    }

    /// Build an authenticated request carrying a JSON body.
    pub(crate) fn authorized_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<RequestBuilder> {
        Ok(self.authorized(method, path)?.json(body))
    }

    /// Send and decode the JSON body of a success response.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.dispatch(operation, request).await?;

        let body = response
            .json::<T>()
            .await
            .inspect_err(|e| tracing::error!(operation, error = %e, "Response parse error"))?;
        Ok(body)
    }

    /// Send and discard the body of a success response.
    pub(crate) async fn send_empty(&self, operation: &'static str, request: RequestBuilder) -> Result<()> {
        self.dispatch(operation, request).await.map(|_| ())
    }

    async fn dispatch(&self, operation: &'static str, request: RequestBuilder) -> Result<Response> {
        let start = Instant::now();

        let response = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(operation, error = %e, "Network error"))?;

        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            tracing::debug!(
                operation,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request completed"
            );
            return Ok(response);
        }

        let message = error_message(status, response).await;
        tracing::warn!(
            operation,
            status = status.as_u16(),
            error = %message,
            duration_ms = duration.as_millis(),
            "Request failed"
        );

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Message for a non-success response: the JSON `message`/`error` field, else the raw
/// body, else the status reason.
async fn error_message(status: StatusCode, response: Response) -> String {
    let body = response.text().await.unwrap_or_default();

    serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(ErrorResponse::into_message)
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty() && !text.starts_with('{')).then(|| text.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        })
}

// Implement ExpenseApi trait for ApiClient
#[async_trait]
impl ExpenseApi for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<AuthResponse> {
        super::auth::login(self, email, password).await
    }

    async fn register(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    ) -> Result<AuthResponse> {
        super::auth::register(self, first_name, last_name, email, password).await
    }

    async fn sign_in(&self, email: String, password: String) -> Result<AuthResponse> {
        super::auth::sign_in(self, email, password).await
    }

    async fn sign_up(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    ) -> Result<AuthResponse> {
        super::auth::sign_up(self, first_name, last_name, email, password).await
    }

    fn sign_out(&self) -> Result<()> {
        super::auth::sign_out(self)
    }

    fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        ApiClient::list_categories(self).await
    }

    async fn get_category(&self, category_id: i64) -> Result<Category> {
        ApiClient::get_category(self, category_id).await
    }

    async fn create_category(&self, title: String, description: String) -> Result<Category> {
        ApiClient::create_category(self, &title, &description).await
    }

    async fn update_category(&self, category_id: i64, title: String, description: String) -> Result<()> {
        ApiClient::update_category(self, category_id, &title, &description).await
    }

    async fn delete_category(&self, category_id: i64) -> Result<()> {
        ApiClient::delete_category(self, category_id).await
    }

    async fn list_transactions(&self, category_id: i64) -> Result<Vec<Transaction>> {
        ApiClient::list_transactions(self, category_id).await
    }

    async fn get_transaction(&self, category_id: i64, transaction_id: i64) -> Result<Transaction> {
        ApiClient::get_transaction(self, category_id, transaction_id).await
    }

    async fn create_transaction(&self, category_id: i64, form: &TransactionForm) -> Result<Transaction> {
        ApiClient::create_transaction(self, category_id, form).await
    }

    async fn update_transaction(
        &self,
        category_id: i64,
        transaction_id: i64,
        form: &TransactionForm,
    ) -> Result<()> {
        ApiClient::update_transaction(self, category_id, transaction_id, form).await
    }

    async fn delete_transaction(&self, category_id: i64, transaction_id: i64) -> Result<()> {
        ApiClient::delete_transaction(self, category_id, transaction_id).await
    }

    async fn get_budget(&self) -> Result<Budget> {
        ApiClient::get_budget(self).await
    }

    async fn update_budget(&self, total_budget: f64) -> Result<Budget> {
        ApiClient::update_budget(self, total_budget).await
    }
}
