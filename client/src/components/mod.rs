//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `list_content` maps list state to placeholders or rows; `data_table` and
//! `table_filter` back the admin pages; `prepared_card` lays out one order.

pub mod data_table;
pub mod list_content;
pub mod prepared_card;
pub mod table_filter;
