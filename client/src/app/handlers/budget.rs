//! # Budget Handlers
//!
//! A user who never set a budget has no budget row; the server answers `GET /budget`
//! with 404 then, which is shown as "not set" rather than as an error.

use shared::utils::format_amount;
use shared::Budget;

use crate::app::commands::BudgetCommand;
use crate::core::error::{ClientError, Result};
use crate::core::service::ExpenseApi;

pub(crate) async fn handle_budget_command(api: &dyn ExpenseApi, command: BudgetCommand) -> Result<String> {
    match command {
        BudgetCommand::Show => {
            let budget = unset_if_missing(api.get_budget().await)?;
            Ok(match budget.total_budget {
                Some(total) => format!("Budget: {}", format_amount(total)),
                None => "Budget: not set".to_string(),
            })
        }
        BudgetCommand::Set { amount } => {
            let total = lib_utils::parse_amount(&amount).map_err(ClientError::Validation)?;
            let budget = api.update_budget(total).await?;
            Ok(format!(
                "Budget set to {}",
                format_amount(budget.total_budget.unwrap_or(total))
            ))
        }
    }
}

/// Map the server's 404 for a missing budget row to an unset budget.
pub(crate) fn unset_if_missing(result: Result<Budget>) -> Result<Budget> {
    match result {
        Err(ClientError::Api { status: 404, .. }) => {
            tracing::debug!("No budget stored for this user");
            Ok(Budget {
                budget_id: None,
                user_id: None,
                total_budget: None,
            })
        }
        other => other,
    }
}
