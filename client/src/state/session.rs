//! Session lifecycle: restore at mount, sign in, sign out.
//!
//! DESIGN
//! ======
//! These flows are the only writers of the auth flag. The header, login form,
//! and `App` call them instead of mutating the token slot or the flag
//! themselves, so token presence and `is_auth` move together.
//!
//! TRADE-OFFS
//! ==========
//! The blog API answers a completed logout with 401. A 401 therefore means
//! "signed out" and clears local state; any other failure keeps the session
//! so the user can retry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::auth::{AuthFlag, AuthState};
use crate::net::auth;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::types::Credentials;
use crate::util::token_store::TokenStore;

/// Initialize the auth flag from token presence.
pub fn restore(store: &dyn TokenStore, flag: &impl AuthFlag) {
    let state = AuthState::from_token(store.token().as_deref());
    flag.set_auth(state.is_auth);
}

/// Log in, persist the returned token, and mark the session authenticated.
///
/// # Errors
///
/// Returns the login call's error; stored state is untouched in that case.
pub async fn sign_in<T: Transport>(
    client: &ApiClient<T>,
    flag: &impl AuthFlag,
    credentials: &Credentials,
) -> Result<(), ApiError> {
    let resp = auth::login(client, credentials).await?;
    client.store().set_token(&resp.access_token);
    flag.set_auth(true);
    log::info!("signed in");
    Ok(())
}

/// Log out. No-op for anonymous sessions.
///
/// # Errors
///
/// Returns failures other than 401; session state is left unchanged for those.
pub async fn sign_out<T: Transport>(client: &ApiClient<T>, flag: &impl AuthFlag) -> Result<(), ApiError> {
    if !flag.is_auth() {
        return Ok(());
    }
    match auth::logout(client).await {
        Ok(()) => {}
        Err(err) if err.is_unauthorized() => {}
        Err(err) => {
            log::warn!("logout failed: {err}");
            return Err(err);
        }
    }
    client.store().clear_token();
    flag.set_auth(false);
    log::info!("signed out");
    Ok(())
}
