//! Auth endpoints: login, token refresh, logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::http::Transport;
use super::types::{Credentials, TokenResponse};
use crate::config::api_path;

/// `POST /api/v1/auth/login`.
///
/// # Errors
///
/// Returns the transport error unchanged, including 401 for bad credentials.
pub async fn login<T: Transport>(client: &ApiClient<T>, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
    client.post(&api_path("/auth/login"), Some(credentials)).await
}

/// `POST /api/v1/auth/refresh_token`, returning the new access token.
///
/// The refresh credential travels as a cookie, so no body is sent.
///
/// # Errors
///
/// Returns the transport error unchanged.
pub async fn refresh_token<T: Transport>(client: &ApiClient<T>) -> Result<String, ApiError> {
    let resp: TokenResponse = client.post::<(), _>(&api_path("/auth/refresh_token"), None).await?;
    Ok(resp.access_token)
}

/// `POST /api/v1/auth/logout`.
///
/// # Errors
///
/// Returns the transport error unchanged. The blog API answers a completed
/// logout with 401, which callers treat as success.
pub async fn logout<T: Transport>(client: &ApiClient<T>) -> Result<(), ApiError> {
    client.post_empty(&api_path("/auth/logout")).await
}
