//! Tourbook browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! A Leptos CSR app over the `tourbook` core crate. The core owns session
//! state, route access rules and every API call; this crate supplies the
//! browser transport and storage, mirrors the session phase into a signal,
//! and renders the route surface.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
