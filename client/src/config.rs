//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so the API origin is
//! baked in at compile time from `BLOG_API_BASE`. Left unset, requests go to
//! the page's own origin and the hosting server proxies them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Path prefix of every REST endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// API origin for this build (empty for same-origin).
pub fn api_base() -> &'static str {
    normalize_base(option_env!("BLOG_API_BASE").unwrap_or_default())
}

fn normalize_base(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}

/// Prefix `path` with [`API_PREFIX`].
pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}
