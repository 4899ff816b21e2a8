//! # API Client Tests
//!
//! Runs the client against an in-process fake of the expense tracker API bound to an
//! ephemeral localhost port. The fake counts every request and records the
//! `Authorization` header it received.


use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Request, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::{Category, Transaction};

use super::*;
use crate::core::error::ClientError;
use crate::session::Session;

pub const TEST_TOKEN: &str = "test-token-123";
pub const TEST_EMAIL: &str = "ada@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";

/// In-memory state of the fake API.
#[derive(Default)]
pub struct FakeApi {
    pub requests: AtomicUsize,
    pub auth_headers: Mutex<Vec<Option<String>>>,
    pub last_body: Mutex<Option<Value>>,
    categories: Mutex<BTreeMap<i64, Category>>,
    transactions: Mutex<BTreeMap<i64, Vec<Transaction>>>,
    budget: Mutex<Option<f64>>,
    next_id: AtomicI64,
}

type Shared = Arc<FakeApi>;
type ApiResult = std::result::Result<Response, Response>;

impl FakeApi {
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Seed a category directly, bypassing HTTP.
    pub fn seed_category(&self, title: &str, description: &str) -> i64 {
        let id = self.next_id();
        self.categories.lock().insert(
            id,
            Category {
                category_id: id,
                user_id: Some(1),
                title: title.to_string(),
                description: Some(description.to_string()),
                total_expense: None,
            },
        );
        id
    }

    /// Seed a transaction directly, bypassing HTTP.
    pub fn seed_transaction(&self, category_id: i64, amount: f64, note: &str, date_millis: i64) -> i64 {
        let id = self.next_id();
        self.transactions
            .lock()
            .entry(category_id)
            .or_default()
            .push(Transaction {
                transaction_id: id,
                category_id: Some(category_id),
                user_id: Some(1),
                amount,
                note: Some(note.to_string()),
                transaction_date: date_millis,
            });
        id
    }

    fn with_total(&self, category: &Category) -> Category {
        let total: f64 = self
            .transactions
            .lock()
            .get(&category.category_id)
            .map(|list| list.iter().map(|t| t.amount).sum())
            .unwrap_or(0.0);
        Category {
            total_expense: Some(total),
            ..category.clone()
        }
    }
}

/// Start the fake API and return `(base_url, state)`.
pub async fn spawn_fake_api() -> (String, Shared) {
    let state: Shared = Arc::new(FakeApi::default());

    let app = Router::new()
        .route("/api/users/login", post(login))
        .route("/api/users/register", post(register))
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/{category_id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route(
            "/api/categories/{category_id}/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/api/categories/{category_id}/transactions/{transaction_id}",
            get(get_transaction).put(update_transaction).delete(delete_transaction),
        )
        .route("/api/budget", get(get_budget).put(update_budget))
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake API listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake API server error");
    });

    (format!("http://{}/api", addr), state)
}

/// Client pointed at the fake API, already logged in.
pub async fn logged_in_client() -> (ApiClient, Shared) {
    let (base_url, state) = spawn_fake_api().await;
    (ApiClient::with_base_url(base_url, Session::with_token(TEST_TOKEN)), state)
}

/// Client pointed at the fake API without a token.
pub async fn anonymous_client() -> (ApiClient, Shared) {
    let (base_url, state) = spawn_fake_api().await;
    (ApiClient::with_base_url(base_url, Session::in_memory()), state)
}

async fn record_request(State(state): State<Shared>, request: Request, next: Next) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.auth_headers.lock().push(header);
    next.run(request).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "status": status.as_u16(),
            "error": status.canonical_reason(),
            "message": message,
        })),
    )
        .into_response()
}

fn check_auth(headers: &HeaderMap) -> std::result::Result<(), Response> {
    match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        None => Err(error(StatusCode::FORBIDDEN, "Authorization token must be provided")),
        Some(value) if value == format!("Bearer {}", TEST_TOKEN) => Ok(()),
        Some(_) => Err(error(StatusCode::FORBIDDEN, "invalid/expired token")),
    }
}

fn not_found(what: &str) -> Response {
    error(StatusCode::NOT_FOUND, &format!("{} not found", what))
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    *state.last_body.lock() = Some(body.clone());
    if body["email"] == TEST_EMAIL && body["password"] == TEST_PASSWORD {
        Json(json!({ "token": TEST_TOKEN, "message": "Login successful" })).into_response()
    } else {
        error(StatusCode::UNAUTHORIZED, "Invalid email/password")
    }
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    *state.last_body.lock() = Some(body.clone());
    if body["email"] == TEST_EMAIL {
        return error(StatusCode::UNAUTHORIZED, "Email already in use");
    }
    Json(json!({ "token": TEST_TOKEN })).into_response()
}

async fn list_categories(State(state): State<Shared>, headers: HeaderMap) -> ApiResult {
    check_auth(&headers)?;
    let stored: Vec<Category> = state.categories.lock().values().cloned().collect();
    let categories: Vec<Category> = stored.iter().map(|c| state.with_total(c)).collect();
    Ok(Json(categories).into_response())
}

async fn get_category(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> ApiResult {
    check_auth(&headers)?;
    let category = state.categories.lock().get(&id).cloned();
    match category {
        Some(category) => Ok(Json(state.with_total(&category)).into_response()),
        None => Err(not_found("Category")),
    }
}

async fn create_category(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> ApiResult {
    check_auth(&headers)?;
    *state.last_body.lock() = Some(body.clone());
    let title = body["title"].as_str().unwrap_or_default();
    let description = body["description"].as_str().unwrap_or_default();
    let id = state.seed_category(title, description);
    let category = state.categories.lock()[&id].clone();
    Ok((StatusCode::CREATED, Json(state.with_total(&category))).into_response())
}

async fn update_category(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult {
    check_auth(&headers)?;
    *state.last_body.lock() = Some(body.clone());
    let mut categories = state.categories.lock();
    let category = categories.get_mut(&id).ok_or_else(|| not_found("Category"))?;
    category.title = body["title"].as_str().unwrap_or_default().to_string();
    category.description = body["description"].as_str().map(str::to_string);
    Ok(Json(json!({ "success": true })).into_response())
}

async fn delete_category(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> ApiResult {
    check_auth(&headers)?;
    if state.categories.lock().remove(&id).is_none() {
        return Err(not_found("Category"));
    }
    state.transactions.lock().remove(&id);
    Ok(Json(json!({ "success": true })).into_response())
}

async fn list_transactions(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> ApiResult {
    check_auth(&headers)?;
    // keep concurrent requests overlapping
    tokio::time::sleep(Duration::from_millis(20)).await;
    let list = state.transactions.lock().get(&id).cloned().unwrap_or_default();
    Ok(Json(list).into_response())
}

async fn get_transaction(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((category_id, transaction_id)): Path<(i64, i64)>,
) -> ApiResult {
    check_auth(&headers)?;
    state
        .transactions
        .lock()
        .get(&category_id)
        .and_then(|list| list.iter().find(|t| t.transaction_id == transaction_id).cloned())
        .map(|t| Json(t).into_response())
        .ok_or_else(|| not_found("Transaction"))
}

async fn create_transaction(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(category_id): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult {
    check_auth(&headers)?;
    *state.last_body.lock() = Some(body.clone());
    if !state.categories.lock().contains_key(&category_id) {
        return Err(not_found("Category"));
    }
    let amount = body["amount"].as_f64().ok_or_else(|| error(StatusCode::BAD_REQUEST, "amount"))?;
    let date = body["transactionDate"]
        .as_i64()
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "transactionDate"))?;
    let note = body["note"].as_str().unwrap_or_default();
    let id = state.seed_transaction(category_id, amount, note, date);
    let created = state.transactions.lock()[&category_id]
        .iter()
        .find(|t| t.transaction_id == id)
        .cloned();
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

async fn update_transaction(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((category_id, transaction_id)): Path<(i64, i64)>,
    Json(body): Json<Value>,
) -> ApiResult {
    check_auth(&headers)?;
    *state.last_body.lock() = Some(body.clone());
    let mut transactions = state.transactions.lock();
    let transaction = transactions
        .get_mut(&category_id)
        .and_then(|list| list.iter_mut().find(|t| t.transaction_id == transaction_id))
        .ok_or_else(|| not_found("Transaction"))?;
    transaction.amount = body["amount"].as_f64().unwrap_or_default();
    transaction.note = body["note"].as_str().map(str::to_string);
    transaction.transaction_date = body["transactionDate"].as_i64().unwrap_or_default();
    Ok(Json(json!({ "success": true })).into_response())
}

async fn delete_transaction(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((category_id, transaction_id)): Path<(i64, i64)>,
) -> ApiResult {
    check_auth(&headers)?;
    let mut transactions = state.transactions.lock();
    let list = transactions.get_mut(&category_id).ok_or_else(|| not_found("Transaction"))?;
    let before = list.len();
    list.retain(|t| t.transaction_id != transaction_id);
    if list.len() == before {
        return Err(not_found("Transaction"));
    }
    Ok(Json(json!({ "success": true })).into_response())
}

async fn get_budget(State(state): State<Shared>, headers: HeaderMap) -> ApiResult {
    check_auth(&headers)?;
    // no budget row until the first update
    let total = (*state.budget.lock()).ok_or_else(|| not_found("Budget"))?;
    Ok(Json(json!({ "budgetId": 1, "userId": 1, "totalBudget": total })).into_response())
}

async fn update_budget(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> ApiResult {
    check_auth(&headers)?;
    *state.last_body.lock() = Some(body.clone());
    let total = body["totalBudget"]
        .as_f64()
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "totalBudget is required"))?;
    *state.budget.lock() = Some(total);
    Ok(Json(json!({ "budgetId": 1, "userId": 1, "totalBudget": total })).into_response())
}

/// Issue every resource operation once, ignoring outcomes.
pub async fn call_every_resource(client: &ApiClient) -> Vec<crate::core::Result<()>> {
    let form = TransactionForm::new("10", "Coffee", "2023-01-01");
    vec![
        client.list_categories().await.map(|_| ()),
        client.get_category(1).await.map(|_| ()),
        client.create_category("Groceries", "Food").await.map(|_| ()),
        client.update_category(1, "Groceries", "Food").await,
        client.delete_category(1).await,
        client.list_transactions(1).await.map(|_| ()),
        client.get_transaction(1, 2).await.map(|_| ()),
        client.create_transaction(1, &form).await.map(|_| ()),
        client.update_transaction(1, 2, &form).await,
        client.delete_transaction(1, 2).await,
        client.get_budget().await.map(|_| ()),
        client.update_budget(500.0).await.map(|_| ()),
    ]
}

#[tokio::test]
async fn test_no_token_means_no_requests() {
    let (client, state) = anonymous_client().await;

    let results = call_every_resource(&client).await;

    assert_eq!(results.len(), 12);
    for result in results {
        assert!(matches!(result, Err(ClientError::MissingSession)));
    }
    assert_eq!(state.request_count(), 0);
}

#[tokio::test]
async fn test_every_request_carries_exact_bearer_header() {
    let (client, state) = logged_in_client().await;

    let _ = call_every_resource(&client).await;

    let headers = state.auth_headers.lock().clone();
    assert_eq!(headers.len(), 12);
    for header in headers {
        assert_eq!(header.as_deref(), Some("Bearer test-token-123"));
    }
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    // bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::with_base_url(format!("http://{}/api", addr), Session::with_token(TEST_TOKEN));
    let err = client.list_categories().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.to_string().starts_with("Network error"));
}

#[tokio::test]
async fn test_rejected_token_is_not_cleared() {
    let (base_url, _state) = spawn_fake_api().await;
    let client = ApiClient::with_base_url(base_url, Session::with_token("expired-token"));

    let err = client.list_categories().await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "invalid/expired token");
    assert!(err.is_auth_failure());
    // no automatic logout
    assert_eq!(client.session().token().unwrap().as_deref(), Some("expired-token"));
}

/// Serve a single canned `/api/categories` response and return the base URL.
async fn spawn_canned_api(response: fn() -> Response) -> String {
    let app = Router::new().route("/api/categories", get(move || async move { response() }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind canned API listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("canned API server error");
    });

    format!("http://{}/api", addr)
}

async fn list_against(response: fn() -> Response) -> ClientError {
    let base_url = spawn_canned_api(response).await;
    let client = ApiClient::with_base_url(base_url, Session::with_token(TEST_TOKEN));
    client.list_categories().await.unwrap_err()
}

#[tokio::test]
async fn test_plain_text_error_body_is_the_message() {
    let err = list_against(|| (StatusCode::BAD_GATEWAY, "upstream down").into_response()).await;

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "upstream down");
}

#[tokio::test]
async fn test_empty_error_body_uses_status_reason() {
    let err = list_against(|| StatusCode::INTERNAL_SERVER_ERROR.into_response()).await;

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn test_json_error_field_is_used_without_message() {
    let err = list_against(|| (StatusCode::BAD_REQUEST, Json(json!({ "error": "Bad category" }))).into_response()).await;

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Bad category");
}

#[tokio::test]
async fn test_json_without_message_or_error_uses_status_reason() {
    let err = list_against(|| (StatusCode::CONFLICT, Json(json!({ "status": 409 }))).into_response()).await;

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "Conflict");
}

#[tokio::test]
async fn test_undecodable_success_body_is_decode_error() {
    let err = list_against(|| (StatusCode::OK, "not json").into_response()).await;

    assert!(matches!(err, ClientError::Decode(_)));
    assert!(err.to_string().starts_with("Failed to parse response"));
}
