//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the expense client and the expense
//! tracker API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration and error bodies
//!   - **[`dto::category`]**: Spending categories
//!   - **[`dto::transaction`]**: Per-category transactions
//!   - **[`dto::budget`]**: The single per-user budget figure
//! - **[`utils`]**: Display helpers
//!   - **[`utils::format_amount`]**: Render a currency value with two decimals
//!   - **[`utils::truncate_text`]**: Shorten free text with an ellipsis
//!
//! ## Wire Format
//!
//! The API speaks camelCase JSON, so every DTO carries `#[serde(rename_all = "camelCase")]`:
//! - `category_id` ↔ `categoryId`, `total_expense` ↔ `totalExpense`
//! - `transaction_date` ↔ `transactionDate` (epoch milliseconds)
//! - `total_budget` ↔ `totalBudget`
//!
//! Response DTOs are lenient: unknown fields are ignored and optional fields may be
//! absent or `null`. Request DTOs always serialize every field.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::category::{Category, CategoryRequest};
//!
//! let request = CategoryRequest {
//!     title: "Groceries".to_string(),
//!     description: "Food".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"title":"Groceries","description":"Food"}"#);
//!
//! let category: Category = serde_json::from_str(
//!     r#"{"categoryId":7,"userId":1,"title":"Groceries","description":"Food","totalExpense":42.5}"#,
//! ).unwrap();
//! assert_eq!(category.category_id, 7);
//! assert_eq!(category.total_expense, Some(42.5));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
