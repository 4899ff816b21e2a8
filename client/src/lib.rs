//! # Expense Tracker Client - Library Root
//!
//! Session-authenticated access to the expense tracker API, plus the `expense`
//! command-line front end built on it.
//!
//! ## Features
//!
//! - **Sessions**: Log in or register once; the bearer token is kept in a session store
//! - **Categories**: List, read, create, update and delete spending categories
//! - **Transactions**: Per-category CRUD with `YYYY-MM-DD` dates on the form side and
//!   epoch milliseconds on the wire
//! - **Budget**: Read and replace the total budget
//! - **Dashboard**: Spending chart and budget summary in the terminal
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              expense-client (this crate)               │
//! ├────────────────────────────────────────────────────────┤
//! │  clap          - Command-line parsing                  │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  tracing       - Structured file logging               │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON, Authorization: Bearer <token>
//!          ▼
//! ┌─────────────────┐
//! │  Expense API    │
//! │  (/api/...)     │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: CLI commands and their handlers
//! - **config**: Environment-driven client settings
//! - **core**: Error type and the [`ExpenseApi`] service trait
//! - **debug**: File logging setup
//! - **services**: The HTTP [`ApiClient`]
//! - **session**: Token storage (memory or JSON file)
//! - **ui**: Text charts and budget summary
//!
//! ## Example
//!
//! ```rust,no_run
//! use expense_client::{ApiClient, Session, TransactionForm};
//!
//! # async fn run() -> expense_client::Result<()> {
//! let client = ApiClient::new(Session::in_memory());
//! expense_client::services::api::auth::sign_in(&client, "ada@example.com".into(), "secret".into()).await?;
//!
//! let category = client.create_category("Groceries", "Food and household").await?;
//! let form = TransactionForm::new("12.50", "Market", "2023-01-01");
//! client.create_transaction(category.category_id, &form).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use app::{App, Cli, Command};
pub use config::ClientConfig;
pub use core::{ClientError, ExpenseApi, Result};
pub use services::api::{ApiClient, TransactionForm};
pub use session::Session;
