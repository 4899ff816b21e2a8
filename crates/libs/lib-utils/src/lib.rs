//! # Utilities Library
//!
//! Shared utility functions for environment variables, calendar-date conversion, and validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse};
pub use time::{date_to_epoch_millis, epoch_millis_to_date, today_utc};
pub use validation::{parse_amount, validate_email, validate_not_empty};
