//! # Authentication Endpoints
//!
//! Handles user authentication (login and registration).
//!
//! [`login`] and [`register`] only talk to the server. [`sign_in`] and [`sign_up`] also
//! store the returned token, and only when the call succeeds, so a rejected login
//! leaves the previous session as it was.

use reqwest::Method;
use shared::{AuthResponse, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::core::error::{ClientError, Result};

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<AuthResponse> {
    tracing::info!("Attempting login");

    let request = LoginRequest { email, password };
    let response: AuthResponse = client
        .send_json("login", client.public(Method::POST, "/users/login", &request))
        .await?;

    tracing::info!("Login successful");
    Ok(response)
}

/// Register a new user.
#[tracing::instrument(skip(client, first_name, last_name, password), fields(email = %email))]
pub async fn register(
    client: &ApiClient,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
) -> Result<AuthResponse> {
    let request = RegisterRequest {
        first_name,
        last_name,
        email,
        password,
    };

    let response: AuthResponse = client
        .send_json("register", client.public(Method::POST, "/users/register", &request))
        .await?;

    tracing::info!("Registration successful");
    Ok(response)
}

/// Login and keep the returned token in the session.
pub async fn sign_in(client: &ApiClient, email: String, password: String) -> Result<AuthResponse> {
    let response = login(client, email, password).await?;
    persist_token(client, &response)?;
    Ok(response)
}

/// Register and keep the returned token in the session.
pub async fn sign_up(
    client: &ApiClient,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
) -> Result<AuthResponse> {
    let response = register(client, first_name, last_name, email, password).await?;
    persist_token(client, &response)?;
    Ok(response)
}

/// Forget the stored token. No request is made.
pub fn sign_out(client: &ApiClient) -> Result<()> {
    client.session().clear()?;
    tracing::info!("Signed out");
    Ok(())
}

fn persist_token(client: &ApiClient, response: &AuthResponse) -> Result<()> {
    if response.token.trim().is_empty() {
        return Err(ClientError::Decode(
            "authentication response did not include a token".to_string(),
        ));
    }
    client.session().store_token(&response.token)
}
