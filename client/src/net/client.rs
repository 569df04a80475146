//! Authenticated JSON client over a [`Transport`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Every service call funnels through [`ApiClient`], which resolves the URL
//! against the configured API base, attaches the stored token as the raw
//! `Authorization` header, and maps non-2xx statuses to
//! [`ApiError::Status`]. The client is cheap to clone and is provided to the
//! component tree through Leptos context.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::{BrowserTransport, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::util::token_store::TokenStore;

/// Client type provided through context in the running application.
pub type AppClient = ApiClient<BrowserTransport>;

/// JSON REST client bound to one API base URL and one token store.
pub struct ApiClient<T> {
    transport: T,
    store: Arc<dyn TokenStore>,
    base_url: Arc<str>,
}

impl<T: Clone> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            store: Arc::clone(&self.store),
            base_url: Arc::clone(&self.base_url),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, store: Arc<dyn TokenStore>, base_url: &str) -> Self {
        Self { transport, store, base_url: Arc::from(base_url.trim_end_matches('/')) }
    }

    /// Token store shared with session flows and the fetch hook.
    pub fn store(&self) -> &dyn TokenStore {
        self.store.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute (or origin-relative) URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Propagates transport failures, non-2xx statuses, and decode failures.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.send(HttpMethod::Get, path, None).await?;
        decode(&resp)
    }

    /// `POST path` with an optional JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates encode, transport, status, and decode failures.
    pub async fn post<B, R>(&self, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = body.map(encode).transpose()?;
        let resp = self.send(HttpMethod::Post, path, body).await?;
        decode(&resp)
    }

    /// `POST path` without a body, ignoring whatever the server returns on
    /// success.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and non-2xx statuses.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Post, path, None).await.map(|_| ())
    }

    async fn send(&self, method: HttpMethod, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest { method, url: self.url(path), authorization: self.store.token(), body };
        let resp = self.transport.send(request).await?;
        if resp.is_success() {
            Ok(resp)
        } else {
            Err(ApiError::Status { status: resp.status, body: resp.body })
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}
