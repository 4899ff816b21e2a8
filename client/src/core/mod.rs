//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Client error type (`ClientError`, `Result<T>`)
//! - **[`service`]**: The [`ExpenseApi`] trait implemented by the HTTP client
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use expense_client::core::ExpenseApi;
//! use expense_client::services::api::ApiClient;
//! use expense_client::session::Session;
//!
//! let api: Arc<dyn ExpenseApi> = Arc::new(ApiClient::new(Session::in_memory()));
//! ```

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::ExpenseApi;
