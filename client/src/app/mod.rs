//! # Application Orchestrator
//!
//! [`App`] runs one parsed CLI [`Command`] against an [`ExpenseApi`] and returns the
//! text to print.
//!
//! ## Architecture
//!
//! ```text
//! main.rs
//!   │  Cli::parse()
//!   ▼
//! App::execute(command)
//!   │
//!   ├── handlers::auth         login, register, logout, status
//!   ├── handlers::category     category list|show|add|edit|delete
//!   ├── handlers::transaction  transaction list|show|add|edit|delete
//!   ├── handlers::budget       budget show|set
//!   └── handlers::dashboard    chart + budget summary
//!           │
//!           ▼
//!   Arc<dyn ExpenseApi>  (ApiClient in the binary, fakes in tests)
//! ```
//!
//! Handlers never print; a failed command leaves the stored session as it was.

pub mod commands;
pub mod handlers;


use std::sync::Arc;

pub use commands::{BudgetCommand, CategoryCommand, Cli, Command, TransactionCommand};

use crate::core::error::Result;
use crate::core::service::ExpenseApi;

/// Command runner for the `expense` binary.
pub struct App {
    api: Arc<dyn ExpenseApi>,
}

impl App {
    pub fn new(api: Arc<dyn ExpenseApi>) -> Self {
        Self { api }
    }

    /// Run a command and return its output.
    pub async fn execute(&self, command: Command) -> Result<String> {
        let api = self.api.as_ref();

        match command {
            Command::Login { email, password } => handlers::auth::handle_login(api, email, password).await,
            Command::Register {
                first_name,
                last_name,
                email,
                password,
            } => handlers::auth::handle_register(api, first_name, last_name, email, password).await,
            Command::Logout => handlers::auth::handle_logout(api),
            Command::Status => Ok(handlers::auth::handle_status(api)),
            Command::Dashboard { width } => handlers::dashboard::handle_dashboard(api, width).await,
            Command::Category(cmd) => handlers::category::handle_category_command(api, cmd).await,
            Command::Transaction(cmd) => {
                handlers::transaction::handle_transaction_command(api, cmd, commands::DEFAULT_CHART_WIDTH).await
            }
            Command::Budget(cmd) => handlers::budget::handle_budget_command(api, cmd).await,
        }
    }
}
