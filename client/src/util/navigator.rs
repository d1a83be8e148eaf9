//! Bridges the core `Navigator` seam to the Leptos router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated request client forces a redirect to `/login` from
//! inside an async task, where `use_navigate` cannot be called. It writes the
//! target into a signal instead, and an effect installed under the router
//! performs the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use tourbook::nav::Navigator;

#[derive(Clone, Copy, Debug)]
pub struct SignalNavigator {
    pending: RwSignal<Option<String>>,
}

impl SignalNavigator {
    pub fn new() -> Self {
        Self { pending: RwSignal::new(None) }
    }

    /// Perform queued navigations. Call once from a component under the
    /// router.
    pub fn install<F>(self, navigate: F)
    where
        F: Fn(&str, NavigateOptions) + Clone + 'static,
    {
        let pending = self.pending;
        Effect::new(move || {
            if let Some(to) = pending.get() {
                pending.set(None);
                navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    }
}

impl Default for SignalNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for SignalNavigator {
    fn navigate(&self, to: &str) {
        tracing::debug!(%to, "queue navigation");
        self.pending.set(Some(to.to_owned()));
    }
}
