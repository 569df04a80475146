//! User endpoints: directory, profile, registration.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::http::Transport;
use super::types::{Registration, User};
use crate::config::api_path;

fn user_endpoint(id: &str) -> String {
    api_path(&format!("/users/{id}"))
}

/// `GET /api/v1/users`.
///
/// # Errors
///
/// Returns the transport error unchanged.
pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<User>, ApiError> {
    client.get(&api_path("/users")).await
}

/// `GET /api/v1/users/{id}`.
///
/// # Errors
///
/// Returns the transport error unchanged.
pub async fn get<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<User, ApiError> {
    client.get(&user_endpoint(id)).await
}

/// `POST /api/v1/users`, returning the created account.
///
/// # Errors
///
/// Returns the transport error unchanged; password rules are enforced by the
/// server.
pub async fn register<T: Transport>(client: &ApiClient<T>, registration: &Registration) -> Result<User, ApiError> {
    client.post(&api_path("/users"), Some(registration)).await
}
