//! Client-side list state.
//!
//! DESIGN
//! ======
//! `load` owns the lifecycle shared by every list page; `provider` and
//! `prepared` define the records each page loads.

pub mod load;
pub mod prepared;
pub mod provider;
