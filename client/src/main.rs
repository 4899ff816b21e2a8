//! # Expense CLI
//!
//! Entry point of the `expense` binary: load settings, open the stored session, run one
//! command and print its output.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use expense_client::{ApiClient, App, Cli, ClientConfig, Result};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _log_guard = expense_client::debug::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    config.validate()?;

    let session = config.file_session()?;
    let client = ApiClient::with_config(&config, session)?;
    tracing::debug!(api_url = %client.base_url(), "Client ready");

    App::new(Arc::new(client)).execute(cli.command).await
}
