use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, DEFAULT_UPSTREAM_URL);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BLOG_API_URL", "https://blog.example.test/"),
        ("PROXY_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url, "https://blog.example.test");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn from_lookup_rejects_non_http_upstream() {
    let err = ServerConfig::from_lookup(lookup(&[("BLOG_API_URL", "ftp://blog")])).unwrap_err();
    assert!(err.to_string().contains("BLOG_API_URL"));
}

#[test]
fn blank_upstream_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BLOG_API_URL", "  ")])).unwrap();
    assert_eq!(cfg.upstream_url, DEFAULT_UPSTREAM_URL);
}
