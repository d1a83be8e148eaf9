//! Fire-and-forget async work on the browser event loop.

use std::future::Future;

/// Run `fut` with `spawn_local`. Outside the browser build there is no
/// executor and the future is dropped unpolled.
pub fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
