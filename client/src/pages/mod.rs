//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and form handling and calls the core
//! clients from `Services`; shared rendering lives in `components`.

pub mod auth_callback;
pub mod dashboard;
pub mod dashboard_admin;
pub mod dashboard_guide;
pub mod dashboard_tourist;
pub mod guide;
pub mod home;
pub mod info;
pub mod login;
pub mod not_found;
pub mod package;
pub mod payment;
pub mod register;
pub mod stories;
