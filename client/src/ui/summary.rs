//! # Budget Summary
//!
//! Budget against spending, as shown on the dashboard.

use std::fmt;

use shared::utils::format_amount;
use shared::{Budget, Category};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    /// `None` until the user sets a budget
    pub total_budget: Option<f64>,
    pub spent: f64,
}

impl BudgetSummary {
    /// Spent is the sum of the category totals.
    pub fn new(budget: &Budget, categories: &[Category]) -> Self {
        Self {
            total_budget: budget.total_budget,
            spent: categories.iter().filter_map(|c| c.total_expense).sum(),
        }
    }

    /// Budget left; negative when overspent.
    pub fn remaining(&self) -> Option<f64> {
        self.total_budget.map(|total| total - self.spent)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining().is_some_and(|r| r < 0.0)
    }
}

impl fmt::Display for BudgetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.total_budget, self.remaining()) {
            (Some(total), Some(remaining)) => {
                writeln!(f, "Budget:    {}", format_amount(total))?;
                writeln!(f, "Spent:     {}", format_amount(self.spent))?;
                write!(f, "Remaining: {}", format_amount(remaining))?;
                if self.is_over_budget() {
                    write!(f, " (over budget)")?;
                }
                Ok(())
            }
            _ => {
                writeln!(f, "Budget:    not set")?;
                write!(f, "Spent:     {}", format_amount(self.spent))
            }
        }
    }
}
