//! Network and storage adapters for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! All request logic lives in the core crate (`tourbook::net`); this module
//! only supplies the browser-side `Transport` and `KeyValueStore`.

pub mod browser;
