//! # Text Rendering
//!
//! Terminal output for the CLI: bar charts of spending and the budget summary.

pub mod chart;
pub mod summary;

pub use chart::{render_bars, BarSeries, MAX_CHART_WIDTH};
pub use summary::BudgetSummary;
