//! # Logging Infrastructure
//!
//! File-based tracing for the expense CLI. Command output goes to stdout, so every log
//! event is written to a daily-rotated file instead of the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use expense_client::debug;
//!
//! // keep the guard alive until exit so buffered lines are flushed
//! let _guard = debug::init();
//!
//! tracing::info!(endpoint = "/categories", duration_ms = 12, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `expense_client=debug,info`)
//! - `EXPENSE_LOG_DIR`: Directory for the rotated log files (default: `logs`)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging from the environment.
///
/// Returns `None` when the log directory cannot be created; the CLI then runs without
/// a log file.
pub fn init() -> Option<WorkerGuard> {
    init_logger(&DebugConfig::from_env())
}
