//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session mirror and `Services` from Leptos context;
//! none of them hold session state of their own.

pub mod navbar;
pub mod notice;
pub mod package_card;
pub mod protected_route;
