use std::cell::{Cell, RefCell};

use super::*;
use crate::net::http::HttpMethod;
use crate::net::posts;
use crate::net::testing::{ScriptedTransport, client, empty, json, offline};
use crate::net::types::Post;
use crate::util::token_store::TokenStore;

/// Records every state write and mirrors the current loading flag.
#[derive(Default)]
struct Recorder {
    loading: Cell<bool>,
    loading_writes: RefCell<Vec<bool>>,
    errors: RefCell<Vec<ApiError>>,
}

impl FetchStatus for Recorder {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        self.loading_writes.borrow_mut().push(loading);
    }

    fn set_error(&self, error: ApiError) {
        self.errors.borrow_mut().push(error);
    }
}

fn post_body() -> serde_json::Value {
    serde_json::json!({"id": 42, "title": "T", "content": "C", "created_at": "2024-01-01"})
}

const POST_URL: &str = "/api/v1/posts/42";
const REFRESH_URL: &str = "/api/v1/auth/refresh_token";

// =============================================================
// Happy path
// =============================================================

#[test]
fn get_post_populates_state_and_clears_loading() {
    let transport = ScriptedTransport::new([json(200, post_body())]);
    let (api, _store) = client(&transport, Some("tok"));
    let status = Recorder::default();
    let slot: RefCell<Option<Post>> = RefCell::new(None);

    let (api_ref, slot_ref) = (&api, &slot);
    let op = move |id: String| async move {
        let post = posts::get(api_ref, &id).await?;
        *slot_ref.borrow_mut() = Some(post);
        Ok(())
    };
    futures::executor::block_on(drive(&api, &status, &op, "42".to_owned()));

    let post = slot.into_inner().expect("post stored");
    assert_eq!(post.id, 42);
    assert_eq!(post.title, "T");
    assert_eq!(post.content, "C");
    assert_eq!(post.created_at, "2024-01-01");
    assert!(!status.loading.get());
    assert!(status.errors.borrow().is_empty());
}

#[test]
fn loading_is_true_only_while_in_flight() {
    let transport = ScriptedTransport::default();
    let (api, _store) = client(&transport, None);
    let status = Recorder::default();
    let observed = Cell::new(None);

    let (status_ref, observed_ref) = (&status, &observed);
    let op = move |()| async move {
        observed_ref.set(Some(status_ref.loading.get()));
        Ok(())
    };
    assert!(!status.loading.get());
    futures::executor::block_on(drive(&api, &status, &op, ()));

    assert_eq!(observed.get(), Some(true));
    assert_eq!(*status.loading_writes.borrow(), vec![true, false]);
}

#[test]
fn loading_resets_after_failure() {
    let transport = ScriptedTransport::new([empty(500)]);
    let (api, _store) = client(&transport, None);
    let status = Recorder::default();

    let api_ref = &api;
    let op = move |()| async move { posts::list(api_ref).await.map(|_| ()) };
    futures::executor::block_on(drive(&api, &status, &op, ()));

    assert_eq!(*status.loading_writes.borrow(), vec![true, false]);
}

// =============================================================
// Non-401 failures
// =============================================================

#[test]
fn non_401_failure_records_error_without_refresh() {
    let transport = ScriptedTransport::new([empty(500)]);
    let (api, _store) = client(&transport, Some("tok"));
    let status = Recorder::default();
    let calls = Cell::new(0);

    let (api_ref, calls_ref) = (&api, &calls);
    let op = move |id: String| async move {
        calls_ref.set(calls_ref.get() + 1);
        posts::get(api_ref, &id).await.map(|_| ())
    };
    futures::executor::block_on(drive(&api, &status, &op, "42".to_owned()));

    assert_eq!(calls.get(), 1);
    assert_eq!(transport.count(HttpMethod::Post, REFRESH_URL), 0);
    assert_eq!(status.errors.borrow().as_slice(), &[ApiError::Status { status: 500, body: "null".to_owned() }]);
}

#[test]
fn network_failure_records_error_without_refresh() {
    let transport = ScriptedTransport::new([offline()]);
    let (api, _store) = client(&transport, Some("tok"));
    let status = Recorder::default();

    let api_ref = &api;
    let op = move |()| async move { posts::list(api_ref).await.map(|_| ()) };
    futures::executor::block_on(drive(&api, &status, &op, ()));

    assert_eq!(transport.count(HttpMethod::Post, REFRESH_URL), 0);
    assert!(matches!(status.errors.borrow()[0], ApiError::Network(_)));
}

// =============================================================
// 401 refresh + retry
// =============================================================

#[test]
fn unauthorized_refreshes_once_and_retries_once() {
    let transport = ScriptedTransport::new([
        empty(401),
        json(200, serde_json::json!({"access_token": "fresh"})),
        json(200, post_body()),
    ]);
    let (api, store) = client(&transport, Some("stale"));
    let status = Recorder::default();
    let slot: RefCell<Option<Post>> = RefCell::new(None);

    let (api_ref, slot_ref) = (&api, &slot);
    let op = move |id: String| async move {
        let post = posts::get(api_ref, &id).await?;
        *slot_ref.borrow_mut() = Some(post);
        Ok(())
    };
    futures::executor::block_on(drive(&api, &status, &op, "42".to_owned()));

    assert_eq!(transport.count(HttpMethod::Post, REFRESH_URL), 1);
    assert_eq!(transport.count(HttpMethod::Get, POST_URL), 2);
    assert_eq!(store.token().as_deref(), Some("fresh"));
    assert_eq!(slot.borrow().as_ref().map(|p| p.id), Some(42));

    // The retry carried the refreshed token.
    let sent = transport.requests();
    assert_eq!(sent[0].authorization.as_deref(), Some("stale"));
    assert_eq!(sent[2].authorization.as_deref(), Some("fresh"));
}

#[test]
fn successful_retry_keeps_first_error() {
    let transport = ScriptedTransport::new([
        empty(401),
        json(200, serde_json::json!({"access_token": "fresh"})),
        json(200, post_body()),
    ]);
    let (api, _store) = client(&transport, Some("stale"));
    let status = Recorder::default();

    let api_ref = &api;
    let op = move |id: String| async move { posts::get(api_ref, &id).await.map(|_| ()) };
    futures::executor::block_on(drive(&api, &status, &op, "42".to_owned()));

    let errors = status.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_unauthorized());
    assert!(!status.loading.get());
}

#[test]
fn failed_retry_is_swallowed_and_not_repeated() {
    let transport = ScriptedTransport::new([
        empty(401),
        json(200, serde_json::json!({"access_token": "fresh"})),
        empty(401),
    ]);
    let (api, _store) = client(&transport, Some("stale"));
    let status = Recorder::default();

    let api_ref = &api;
    let op = move |id: String| async move { posts::get(api_ref, &id).await.map(|_| ()) };
    futures::executor::block_on(drive(&api, &status, &op, "42".to_owned()));

    assert_eq!(transport.count(HttpMethod::Post, REFRESH_URL), 1);
    assert_eq!(transport.count(HttpMethod::Get, POST_URL), 2);
    assert_eq!(transport.requests().len(), 3);
    let errors = status.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_unauthorized());
}

#[test]
fn retry_failure_with_other_status_still_reports_first_error() {
    let transport = ScriptedTransport::new([
        empty(401),
        json(200, serde_json::json!({"access_token": "fresh"})),
        empty(503),
    ]);
    let (api, _store) = client(&transport, Some("stale"));
    let status = Recorder::default();

    let api_ref = &api;
    let op = move |id: String| async move { posts::get(api_ref, &id).await.map(|_| ()) };
    futures::executor::block_on(drive(&api, &status, &op, "42".to_owned()));

    assert_eq!(status.errors.borrow()[0].status(), Some(401));
}

#[test]
fn refresh_failure_skips_retry() {
    let transport = ScriptedTransport::new([empty(401), empty(401)]);
    let (api, store) = client(&transport, Some("stale"));
    let status = Recorder::default();
    let calls = Cell::new(0);

    let (api_ref, calls_ref) = (&api, &calls);
    let op = move |()| async move {
        calls_ref.set(calls_ref.get() + 1);
        posts::list(api_ref).await.map(|_| ())
    };
    futures::executor::block_on(drive(&api, &status, &op, ()));

    assert_eq!(calls.get(), 1);
    assert_eq!(transport.count(HttpMethod::Post, REFRESH_URL), 1);
    assert_eq!(store.token().as_deref(), Some("stale"));
    assert!(status.errors.borrow()[0].is_unauthorized());
    assert!(!status.loading.get());
}
