//! # Shared Utility Functions
//!
//! Display helpers used when printing API records.
//!
//! ```rust
//! use shared::utils::{format_amount, truncate_text};
//!
//! assert_eq!(format_amount(12.5), "12.50");
//! assert_eq!(truncate_text("Weekly groceries at the market", 10), "Weekly ...");
//! ```

/// Format a currency amount with two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Shorten `text` to at most `max_chars` characters, ending with `...` when cut.
///
/// Counts characters rather than bytes so notes with non-ASCII text never split a code point.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }

    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}
