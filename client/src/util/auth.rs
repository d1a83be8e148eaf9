//! Redirect-based social sign-in helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page starts the flow and leaves the app for the provider; the
//! callback page runs after a full reload. The pending challenge is parked
//! in browser storage between the two and consumed exactly once.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use tourbook::identity::SocialChallenge;
use tourbook::net::transport::join_url;
use tourbook::routes::AUTH_CALLBACK_PATH;
use tourbook::storage::{KeyValueStore, StorageError};

pub const CHALLENGE_STORAGE_KEY: &str = "social-challenge";

/// Absolute callback URL for an app served at `origin`.
pub fn callback_uri(origin: &str) -> String {
    join_url(origin, AUTH_CALLBACK_PATH)
}

/// # Errors
///
/// Returns an error if the challenge cannot be written.
pub fn stash_challenge(store: &dyn KeyValueStore, challenge: &SocialChallenge) -> Result<(), StorageError> {
    let raw = serde_json::to_string(challenge)?;
    store.set(CHALLENGE_STORAGE_KEY, &raw)
}

/// Read and remove the parked challenge. A missing or unreadable entry is
/// `None`; a callback without a challenge cannot be completed.
pub fn take_challenge(store: &dyn KeyValueStore) -> Option<SocialChallenge> {
    let raw = store.get(CHALLENGE_STORAGE_KEY).ok().flatten()?;
    if let Err(e) = store.remove(CHALLENGE_STORAGE_KEY) {
        tracing::warn!(error = %e, "social challenge cleanup failed");
    }
    match serde_json::from_str(&raw) {
        Ok(challenge) => Some(challenge),
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable social challenge");
            None
        }
    }
}

/// `window.location.origin`, or empty outside the browser.
pub fn origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Full current URL including the provider's query string.
pub fn current_href() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Leave the app for an external URL.
pub fn leave_for(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
