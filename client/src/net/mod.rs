//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the load-boundary error and
//! decoding shared by every list producer.

pub mod api;
pub mod types;
