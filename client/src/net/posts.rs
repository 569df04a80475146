//! Post endpoints.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::http::Transport;
use super::types::Post;
use crate::config::api_path;

fn post_endpoint(id: &str) -> String {
    api_path(&format!("/posts/{id}"))
}

/// `GET /api/v1/posts`.
///
/// # Errors
///
/// Returns the transport error unchanged.
pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Post>, ApiError> {
    client.get(&api_path("/posts")).await
}

/// `GET /api/v1/posts/{id}`.
///
/// # Errors
///
/// Returns the transport error unchanged.
pub async fn get<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<Post, ApiError> {
    client.get(&post_endpoint(id)).await
}
