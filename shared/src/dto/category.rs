use serde::{Deserialize, Serialize};

/// A spending category owned by the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Sum of the category's transactions, computed by the server.
    #[serde(default)]
    pub total_expense: Option<f64>,
}

/// Create/update body for a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRequest {
    pub title: String,
    pub description: String,
}
