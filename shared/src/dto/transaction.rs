use serde::{Deserialize, Serialize};

/// A transaction recorded under exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
    /// Epoch milliseconds (UTC midnight of the transaction day).
    pub transaction_date: i64,
}

/// Create/update body for a transaction, already normalized for the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub amount: f64,
    pub note: String,
    pub transaction_date: i64,
}
