//! # Transaction Endpoints
//!
//! Transactions always live under one category. Create and update take a
//! [`TransactionForm`], the values as typed into an edit form, and normalize them for
//! the wire: the amount becomes an `f64` and the `YYYY-MM-DD` date becomes epoch
//! milliseconds at UTC midnight.

use lib_utils::{date_to_epoch_millis, epoch_millis_to_date, parse_amount};
use reqwest::Method;
use shared::{Transaction, TransactionRequest};

use super::categories::category_path;
use super::client::ApiClient;
use crate::core::error::{ClientError, Result};

/// Transaction values as entered in an edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub amount: String,
    pub note: String,
    /// `YYYY-MM-DD`
    pub transaction_date: String,
}

impl TransactionForm {
    pub fn new(amount: impl Into<String>, note: impl Into<String>, transaction_date: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            note: note.into(),
            transaction_date: transaction_date.into(),
        }
    }

    /// Prefill the form from a stored transaction (read-for-edit).
    pub fn from_transaction(transaction: &Transaction) -> Result<Self> {
        Ok(Self {
            amount: transaction.amount.to_string(),
            note: transaction.note.clone().unwrap_or_default(),
            transaction_date: epoch_millis_to_date(transaction.transaction_date)?,
        })
    }

    /// Normalize into the wire body.
    pub fn to_request(&self) -> Result<TransactionRequest> {
        let amount = parse_amount(&self.amount).map_err(ClientError::Validation)?;
        let transaction_date = date_to_epoch_millis(&self.transaction_date)?;

        Ok(TransactionRequest {
            amount,
            note: self.note.clone(),
            transaction_date,
        })
    }
}

impl ApiClient {
    /// Fetch all transactions of a category.
    pub async fn list_transactions(&self, category_id: i64) -> Result<Vec<Transaction>> {
        let request = self.authorized(Method::GET, &transactions_path(category_id))?;
        self.send_json("list_transactions", request).await
    }

    /// Fetch a single transaction.
    pub async fn get_transaction(&self, category_id: i64, transaction_id: i64) -> Result<Transaction> {
        let request = self.authorized(Method::GET, &transaction_path(category_id, transaction_id))?;
        self.send_json("get_transaction", request).await
    }

    /// Record a transaction under a category.
    pub async fn create_transaction(&self, category_id: i64, form: &TransactionForm) -> Result<Transaction> {
        let request = self.authorized(Method::POST, &transactions_path(category_id))?;
        let body = form.to_request()?;
        self.send_json("create_transaction", request.json(&body)).await
    }

    /// Replace amount, note and date of a transaction.
    pub async fn update_transaction(
        &self,
        category_id: i64,
        transaction_id: i64,
        form: &TransactionForm,
    ) -> Result<()> {
        let request = self.authorized(Method::PUT, &transaction_path(category_id, transaction_id))?;
        let body = form.to_request()?;
        self.send_empty("update_transaction", request.json(&body)).await
    }

    pub async fn delete_transaction(&self, category_id: i64, transaction_id: i64) -> Result<()> {
        let request = self.authorized(Method::DELETE, &transaction_path(category_id, transaction_id))?;
        self.send_empty("delete_transaction", request).await
    }
}

fn transactions_path(category_id: i64) -> String {
    format!("{}/transactions", category_path(category_id))
}

fn transaction_path(category_id: i64, transaction_id: i64) -> String {
    format!("{}/transactions/{}", category_path(category_id), transaction_id)
}
