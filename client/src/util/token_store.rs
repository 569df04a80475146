//! Session token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access token is the only piece of client state that outlives a page
//! load. Every read and write goes through [`TokenStore`] so the API client,
//! the fetch hook, and session flows never touch `localStorage` directly and
//! tests can substitute [`MemoryTokenStore`].

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::Mutex;

/// `localStorage` key holding the raw access token.
pub const TOKEN_KEY: &str = "Authorization";

/// Get/set/clear access to the persisted access token.
///
/// Implementations are shared through Leptos context, hence `Send + Sync`.
pub trait TokenStore: Send + Sync {
    /// Current token, if one is stored and non-empty.
    fn token(&self) -> Option<String>;
    /// Replace the stored token.
    fn set_token(&self, token: &str);
    /// Remove the stored token.
    fn clear_token(&self);
}

/// Browser `localStorage` slot under [`TOKEN_KEY`].
///
/// Outside the browser (SSR, native tests) reads return `None` and writes are
/// dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("failed to persist access token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-process token slot.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a valid Option; keep using it.
        self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.slot().clone().and_then(non_empty)
    }

    fn set_token(&self, token: &str) {
        *self.slot() = Some(token.to_owned());
    }

    fn clear_token(&self) {
        *self.slot() = None;
    }
}

fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}
