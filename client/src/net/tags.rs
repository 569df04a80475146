//! Tag endpoints.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::http::Transport;
use super::types::Tag;
use crate::config::api_path;

/// `GET /api/v1/tags`.
///
/// # Errors
///
/// Returns the transport error unchanged.
pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Tag>, ApiError> {
    client.get(&api_path("/tags")).await
}
