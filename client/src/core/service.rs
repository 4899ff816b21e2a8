//! # Service Traits
//!
//! Traits for dependency injection, so front ends can run against fakes.

use async_trait::async_trait;
use shared::{AuthResponse, Budget, Category, Transaction};

use super::error::Result;
use crate::services::api::TransactionForm;

/// Every session and resource operation of the expense API.
///
/// Implemented by [`crate::services::api::ApiClient`].
#[async_trait]
pub trait ExpenseApi: Send + Sync {
    /// Log in without touching the stored session.
    async fn login(&self, email: String, password: String) -> Result<AuthResponse>;

    /// Register without touching the stored session.
    async fn register(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    ) -> Result<AuthResponse>;

    /// Log in and store the returned token.
    async fn sign_in(&self, email: String, password: String) -> Result<AuthResponse>;

    /// Register and store the returned token.
    async fn sign_up(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    ) -> Result<AuthResponse>;

    /// Drop the stored token.
    fn sign_out(&self) -> Result<()>;

    fn is_authenticated(&self) -> bool;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn get_category(&self, category_id: i64) -> Result<Category>;

    async fn create_category(&self, title: String, description: String) -> Result<Category>;

    async fn update_category(&self, category_id: i64, title: String, description: String) -> Result<()>;

    /// Delete a category. The server removes its transactions too.
    async fn delete_category(&self, category_id: i64) -> Result<()>;

    async fn list_transactions(&self, category_id: i64) -> Result<Vec<Transaction>>;

    async fn get_transaction(&self, category_id: i64, transaction_id: i64) -> Result<Transaction>;

    async fn create_transaction(&self, category_id: i64, form: &TransactionForm) -> Result<Transaction>;

    async fn update_transaction(
        &self,
        category_id: i64,
        transaction_id: i64,
        form: &TransactionForm,
    ) -> Result<()>;

    async fn delete_transaction(&self, category_id: i64, transaction_id: i64) -> Result<()>;

    async fn get_budget(&self) -> Result<Budget>;

    async fn update_budget(&self, total_budget: f64) -> Result<Budget>;
}
