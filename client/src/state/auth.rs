//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RwSignal<AuthState>` is provided once by `App` and read by the header and
//! session flows. The flag is derived from token presence and never persisted
//! itself; it is only written through [`AuthFlag`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

/// Whether the browser currently holds a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_auth: bool,
}

impl AuthState {
    /// State implied by a stored token (or its absence).
    pub fn from_token(token: Option<&str>) -> Self {
        Self { is_auth: token.is_some_and(|t| !t.is_empty()) }
    }
}

/// Setter side of the auth context.
///
/// Session flows write through this trait so they can be driven without a
/// reactive runtime.
pub trait AuthFlag {
    fn is_auth(&self) -> bool;
    fn set_auth(&self, is_auth: bool);
}

impl AuthFlag for RwSignal<AuthState> {
    fn is_auth(&self) -> bool {
        self.get_untracked().is_auth
    }

    fn set_auth(&self, is_auth: bool) {
        if self.get_untracked().is_auth != is_auth {
            self.set(AuthState { is_auth });
        }
    }
}
