//! Authenticated fetch hook: trigger + loading flag + last error.
//!
//! ARCHITECTURE
//! ============
//! [`drive`] is the framework-free control flow; [`use_fetching`] binds it to
//! signals and spawns it on the browser task queue. Pages pass an operation
//! that performs its service calls and writes results into page-local signals.
//!
//! RETRY POLICY
//! ============
//! A 401 from the operation triggers exactly one token refresh and, if that
//! yields a token, exactly one re-run of the operation. The retry's own error
//! is logged and dropped. The error recorded in state is always the first
//! failure, so a retry that succeeds leaves the stale 401 visible. That is a
//! known defect kept for compatibility with the existing pages.
//!
//! There is no debounce or cancellation: concurrent triggers race, and a
//! request that never settles leaves `loading` true.

#[cfg(test)]
#[path = "fetching_test.rs"]
mod fetching_test;

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::auth;
use crate::net::client::{ApiClient, AppClient};
use crate::net::error::ApiError;
use crate::net::http::Transport;

/// Sink for the hook's observable state.
pub trait FetchStatus {
    fn set_loading(&self, loading: bool);
    fn set_error(&self, error: ApiError);
}

/// Signal-backed hook state.
#[derive(Clone, Copy, Debug)]
pub struct FetchState {
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

impl FetchState {
    pub fn new() -> Self {
        Self { loading: RwSignal::new(false), error: RwSignal::new(None) }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchStatus for FetchState {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_error(&self, error: ApiError) {
        self.error.set(Some(error));
    }
}

/// Run `op(payload)` once, applying the refresh-and-retry policy.
pub async fn drive<T, P, Op, Fut>(client: &ApiClient<T>, status: &impl FetchStatus, op: &Op, payload: P)
where
    T: Transport,
    P: Clone,
    Op: Fn(P) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    status.set_loading(true);
    if let Err(err) = op(payload.clone()).await {
        if err.is_unauthorized() {
            retry_after_refresh(client, op, payload).await;
        }
        status.set_error(err);
    }
    status.set_loading(false);
}

async fn retry_after_refresh<T, P, Op, Fut>(client: &ApiClient<T>, op: &Op, payload: P)
where
    T: Transport,
    Op: Fn(P) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let token = match auth::refresh_token(client).await {
        Ok(token) => token,
        Err(err) => {
            log::warn!("token refresh failed: {err}");
            return;
        }
    };
    client.store().set_token(&token);
    if let Err(err) = op(payload).await {
        log::debug!("retry after refresh failed: {err}");
    }
}

/// Wrap `op` with loading/error tracking and the 401 refresh policy.
///
/// Returns `(trigger, loading, error)`. Requires an [`AppClient`] in context.
/// The operation itself may hold non-`Send` values (router handles, `Rc`s);
/// it is parked in local storage so the trigger stays `Send + Sync` and can
/// be captured by `Show` children and event handlers alike.
pub fn use_fetching<P, Op, Fut>(
    op: Op,
) -> (impl Fn(P) + Clone + Send + Sync + 'static, ReadSignal<bool>, ReadSignal<Option<ApiError>>)
where
    P: Clone + 'static,
    Op: Fn(P) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let client = expect_context::<AppClient>();
    let state = FetchState::new();
    let op = StoredValue::new_local(Rc::new(op));

    let trigger = move |payload: P| {
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let op = op.get_value();
            leptos::task::spawn_local(async move {
                drive(&client, &state, op.as_ref(), payload).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, op, payload);
        }
    };

    (trigger, state.loading.read_only(), state.error.read_only())
}
