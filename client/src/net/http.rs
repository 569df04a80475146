//! Raw HTTP exchange used by [`super::client::ApiClient`].
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with cookies
//! included on every request.
//! Server-side (SSR): the transport reports a network error since these
//! endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

use super::error::ApiError;

/// Request verbs the blog API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully resolved request, ready to hand to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Raw token for the `Authorization` header.
    pub authorization: Option<String>,
    /// JSON-encoded body.
    pub body: Option<String>,
}

/// Status and body text of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange.
///
/// Futures are not required to be `Send`; browser fetches run on the single
/// UI thread via `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` and return whatever status the server produced.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] only when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let mut builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
            }
            .credentials(RequestCredentials::Include);
            if let Some(token) = request.authorization.as_deref() {
                builder = builder.header("Authorization", token);
            }
            let sent = match request.body {
                Some(body) => {
                    let req = builder
                        .header("Content-Type", "application/json")
                        .body(body)
                        .map_err(|e| ApiError::Encode(e.to_string()))?;
                    req.send().await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
