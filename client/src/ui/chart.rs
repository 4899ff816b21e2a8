//! # Chart Module
//!
//! Horizontal bar charts rendered as plain text. Bars are scaled so the largest value
//! spans the full width.

use shared::utils::{format_amount, truncate_text};
use shared::{Category, Transaction};

/// Widest bar drawn, in characters.
pub const MAX_CHART_WIDTH: usize = 200;

const BAR_CHAR: char = '█';
const MAX_LABEL_CHARS: usize = 24;
const NO_DATA: &str = "(no data)";

/// One labelled bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Ordered bars of a single chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    pub bars: Vec<Bar>,
}

impl BarSeries {
    /// Spending per category. Categories the server sent without a total count as zero.
    pub fn category_totals(categories: &[Category]) -> Self {
        Self {
            bars: categories
                .iter()
                .map(|c| Bar {
                    label: c.title.clone(),
                    value: c.total_expense.unwrap_or(0.0),
                })
                .collect(),
        }
    }

    /// One bar per transaction, labelled by its note.
    pub fn transaction_series(transactions: &[Transaction]) -> Self {
        Self {
            bars: transactions
                .iter()
                .map(|t| Bar {
                    label: t
                        .note
                        .as_deref()
                        .filter(|n| !n.trim().is_empty())
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("#{}", t.transaction_id)),
                    value: t.amount,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.bars.iter().map(|b| b.value).sum()
    }

    fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// Render `series` as one line per bar: label, bar of up to `width` cells, value.
///
/// `width` is capped at [`MAX_CHART_WIDTH`].
pub fn render_bars(series: &BarSeries, width: usize) -> String {
    if series.is_empty() {
        return NO_DATA.to_string();
    }
    let width = width.min(MAX_CHART_WIDTH);

    let labels: Vec<String> = series
        .bars
        .iter()
        .map(|b| truncate_text(&b.label, MAX_LABEL_CHARS))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = series.max_value();

    series
        .bars
        .iter()
        .zip(labels)
        .map(|(bar, label)| {
            let cells = bar_cells(bar.value, max, width);
            let padding = label_width - label.chars().count();
            format!(
                "{}{} │{}{} {}",
                label,
                " ".repeat(padding),
                BAR_CHAR.to_string().repeat(cells),
                " ".repeat(width - cells),
                format_amount(bar.value)
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cells for `value` on a scale where `max` fills `width`; negatives draw nothing.
fn bar_cells(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 || !value.is_finite() {
        return 0;
    }
    let cells = (value / max * width as f64).round() as usize;
    // non-zero values stay visible
    cells.clamp(1, width.max(1)).min(width)
}
