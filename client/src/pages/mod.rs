//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page starts its own list load on mount and delegates rendering
//! details to `components`.

pub mod prepared;
pub mod provider;
