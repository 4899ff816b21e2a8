use serde::{Deserialize, Serialize};

/// The user's total budget. Replaced wholesale; there is no history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// `None` when the user has never set a budget.
    #[serde(default)]
    pub total_budget: Option<f64>,
}

/// Update body for the budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    pub total_budget: f64,
}
