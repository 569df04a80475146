use super::*;
use crate::net::http::HttpMethod;
use crate::net::testing::{ScriptedTransport, client, json};

#[test]
fn post_endpoint_formats_expected_path() {
    assert_eq!(post_endpoint("42"), "/api/v1/posts/42");
}

#[test]
fn list_decodes_array() {
    let body = serde_json::json!([
        {"id": 1, "title": "a", "content": "x", "created_at": "2024-01-01 00:00:00"},
        {"id": 2, "title": "b", "content": "y", "created_at": "2024-01-02 00:00:00", "image": "media/2.png"}
    ]);
    let transport = ScriptedTransport::new([json(200, body)]);
    let (api, _store) = client(&transport, None);

    let posts = futures::executor::block_on(list(&api)).unwrap();

    assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(transport.calls(), vec![(HttpMethod::Get, "/api/v1/posts".to_owned())]);
}

#[test]
fn get_fetches_single_post() {
    let body = serde_json::json!({"id": 42, "title": "T", "content": "C", "created_at": "2024-01-01"});
    let transport = ScriptedTransport::new([json(200, body)]);
    let (api, _store) = client(&transport, None);

    let post = futures::executor::block_on(get(&api, "42")).unwrap();

    assert_eq!(post.id, 42);
    assert_eq!(post.title, "T");
    assert_eq!(transport.calls(), vec![(HttpMethod::Get, "/api/v1/posts/42".to_owned())]);
}
