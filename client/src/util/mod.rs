//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting and route construction kept free of Leptos so pages and
//! components stay thin.

pub mod money;
pub mod routes;
