//! # Command Handlers
//!
//! One handler per command, organized by domain. Handlers check form values, call the
//! [`ExpenseApi`](crate::core::ExpenseApi) and return the text to print.

pub mod auth;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod transaction;

use crate::core::error::{ClientError, Result};

/// Reject blank required form values before any request is made.
pub(crate) fn require(value: &str, field_name: &str) -> Result<()> {
    lib_utils::validate_not_empty(value, field_name).map_err(ClientError::Validation)
}
