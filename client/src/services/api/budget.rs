//! # Budget Endpoints

use reqwest::Method;
use shared::{Budget, BudgetRequest};

use super::client::ApiClient;
use crate::core::error::{ClientError, Result};

impl ApiClient {
    /// Fetch the user's total budget.
    pub async fn get_budget(&self) -> Result<Budget> {
        let request = self.authorized(Method::GET, "/budget")?;
        self.send_json("get_budget", request).await
    }

    /// Replace the total budget and return the stored value.
    pub async fn update_budget(&self, total_budget: f64) -> Result<Budget> {
        let request = self.authorized(Method::PUT, "/budget")?;
        if !total_budget.is_finite() {
            return Err(ClientError::Validation(format!("Invalid budget '{}'", total_budget)));
        }

        let request = request.json(&BudgetRequest { total_budget });
        self.send_json("update_budget", request).await
    }
}
