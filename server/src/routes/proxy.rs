//! Same-origin forwarding of `/api/v1/*` to the blog API.
//!
//! Only the headers the API contract needs cross the proxy: the raw
//! `Authorization` token, cookies (the refresh credential), and content
//! negotiation. Upstream status and body are relayed verbatim, including
//! `Set-Cookie` so the browser keeps the refresh cookie on this origin.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const REQUEST_HEADERS: [HeaderName; 4] = [header::AUTHORIZATION, header::COOKIE, header::CONTENT_TYPE, header::ACCEPT];
const RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::SET_COOKIE];

/// `ANY /api/v1/{*path}`: forward to `{upstream}/api/v1/{path}?{query}`.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.upstream, &path, query.as_deref());
    let request = state
        .http
        .request(method.clone(), &url)
        .headers(pick_headers(&headers, &REQUEST_HEADERS))
        .body(body);

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = upstream.status();
    let relayed = pick_headers(upstream.headers(), &RESPONSE_HEADERS);
    match upstream.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, status = status.as_u16(), "proxied");
            (status, relayed, bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream body read failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{base}/api/v1/{path}");
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// Copy every value of each allowed header; everything else is dropped.
pub(crate) fn pick_headers(from: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in from.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
