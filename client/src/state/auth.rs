//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A read-only mirror of `SessionProvider::subscribe()`, held in an
//! `RwSignal` so route guards and the navbar re-render on every phase change.
//! The provider stays the only writer of the phase; views only write
//! `return_to`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use tourbook::nav::{HOME_PATH, LOGIN_PATH};
use tourbook::session::{Session, SessionPhase};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub phase: SessionPhase,
    /// Location a guard bounced the user away from.
    pub return_to: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.phase.session()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Where to go after a successful sign-in: the guarded location that
    /// sent the user to login, else home.
    #[must_use]
    pub fn after_login(&self) -> String {
        match self.return_to.as_deref() {
            Some(path) if !path.is_empty() && path != LOGIN_PATH => path.to_owned(),
            _ => HOME_PATH.to_owned(),
        }
    }

    /// Dashboard entry for the signed-in role, if any.
    #[must_use]
    pub fn dashboard_href(&self) -> Option<&'static str> {
        self.session()?.role.map(|role| role.dashboard_path())
    }
}
