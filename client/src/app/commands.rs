//! # CLI Commands
//!
//! Argument definitions for the `expense` binary.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

use crate::ui::MAX_CHART_WIDTH;

pub const DEFAULT_CHART_WIDTH: usize = 40;

fn chart_width_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=MAX_CHART_WIDTH as u64)
}

#[derive(Parser, Debug)]
#[command(
    name = "expense",
    version,
    about = "Track expenses against the expense tracker API",
    long_about = "Command-line client for the expense tracker API. Log in once; the \
                  session token is kept on disk and attached to every later command."
)]
pub struct Cli {
    /// Base URL of the API (overrides EXPENSE_API_URL)
    #[arg(long, global = true, env = "EXPENSE_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Log in and remember the session
    Login {
        /// Account email
        email: String,
        /// Account password
        #[arg(short, long, env = "EXPENSE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and log in
    Register {
        first_name: String,
        last_name: String,
        email: String,
        #[arg(short, long, env = "EXPENSE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show whether a session is stored
    Status,

    /// Spending per category and the budget summary
    Dashboard {
        /// Chart width in characters (1-200)
        #[arg(short, long, default_value_t = DEFAULT_CHART_WIDTH, value_parser = chart_width_parser())]
        width: usize,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommand),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommand),
}

/// Category subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CategoryCommand {
    /// List all categories with their totals
    List,

    /// Show category details
    Show {
        /// Category ID
        id: i64,
    },

    /// Create a new category
    Add {
        /// Category title
        title: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Edit a category; omitted fields keep their current value
    Edit {
        /// Category ID
        id: i64,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a category and all of its transactions
    Delete {
        /// Category ID
        id: i64,
    },
}

/// Transaction subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TransactionCommand {
    /// List the transactions of a category
    List {
        /// Category ID
        category: i64,
        /// Also draw a bar chart
        #[arg(long)]
        chart: bool,
    },

    /// Show transaction details
    Show {
        /// Category ID
        category: i64,
        /// Transaction ID
        id: i64,
    },

    /// Record a new transaction
    Add {
        /// Category ID
        category: i64,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Transaction date (YYYY-MM-DD), today (UTC) when omitted
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Edit a transaction; omitted fields keep their current value
    Edit {
        /// Category ID
        category: i64,
        /// Transaction ID
        id: i64,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Category ID
        category: i64,
        /// Transaction ID
        id: i64,
    },
}

/// Budget subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum BudgetCommand {
    /// Show the total budget
    Show,

    /// Replace the total budget
    Set {
        /// Amount (e.g., "1500")
        amount: String,
    },
}
