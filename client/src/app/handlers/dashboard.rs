//! # Dashboard Handler
//!
//! Categories and budget are fetched concurrently, then drawn as a spending chart
//! followed by the budget summary. A missing budget still renders the chart.

use super::budget::unset_if_missing;
use crate::core::error::Result;
use crate::core::service::ExpenseApi;
use crate::ui::{render_bars, BarSeries, BudgetSummary};

pub(crate) async fn handle_dashboard(api: &dyn ExpenseApi, width: usize) -> Result<String> {
    let (categories, budget) = tokio::join!(api.list_categories(), api.get_budget());
    let categories = categories?;
    let budget = unset_if_missing(budget)?;

    let chart = render_bars(&BarSeries::category_totals(&categories), width);
    let summary = BudgetSummary::new(&budget, &categories);

    Ok(format!("Spending by category\n{}\n\n{}", chart, summary))
}
