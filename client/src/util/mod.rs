//! Browser-side helpers shared by pages and components.

pub mod auth;
pub mod dark_mode;
pub mod navigator;
pub mod task;
