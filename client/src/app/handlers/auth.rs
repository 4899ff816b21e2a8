//! # Authentication Handlers
//!
//! Handlers for login, registration and session status.

use super::require;
use crate::core::error::{ClientError, Result};
use crate::core::service::ExpenseApi;

/// Log in and keep the token.
pub(crate) async fn handle_login(api: &dyn ExpenseApi, email: String, password: String) -> Result<String> {
    require(&email, "Email")?;
    require(&password, "Password")?;

    api.sign_in(email.clone(), password).await?;
    Ok(format!("Logged in as {}", email))
}

/// Register and keep the token.
pub(crate) async fn handle_register(
    api: &dyn ExpenseApi,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
) -> Result<String> {
    require(&first_name, "First name")?;
    require(&last_name, "Last name")?;
    require(&email, "Email")?;
    lib_utils::validate_email(&email).map_err(ClientError::Validation)?;
    require(&password, "Password")?;

    api.sign_up(first_name, last_name, email.clone(), password).await?;
    Ok(format!("Registered and logged in as {}", email))
}

pub(crate) fn handle_logout(api: &dyn ExpenseApi) -> Result<String> {
    api.sign_out()?;
    Ok("Logged out".to_string())
}

pub(crate) fn handle_status(api: &dyn ExpenseApi) -> String {
    if api.is_authenticated() {
        "Logged in".to_string()
    } else {
        "Not logged in".to_string()
    }
}
