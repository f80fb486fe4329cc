//! Load-boundary types: the collapsed load error and decoded JSON batches.
//!
//! DESIGN
//! ======
//! Fetched bodies are decoded entry by entry so one malformed record is
//! rejected on its own instead of failing the batch or reaching the view
//! with missing fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;

/// Any failure while retrieving a list.
///
/// The text of `Network` and `Parse` is the collaborator's message, kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("{0}")]
    Network(String),
    #[error("request failed: {status}")]
    Http { status: u16 },
    #[error("{0}")]
    Parse(String),
}

/// A source entry that did not match the expected record shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejected {
    /// Position in the source array.
    pub index: usize,
    pub reason: String,
}

/// Result of decoding a JSON array body into typed records.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded<T> {
    pub items: Vec<T>,
    pub rejected: Vec<Rejected>,
}

/// Decode a JSON array body, keeping valid entries in source order.
///
/// # Errors
///
/// Returns `LoadError::Parse` if the body is not a JSON array.
pub fn decode_items<T: DeserializeOwned>(body: &str) -> Result<Decoded<T>, LoadError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;

    let mut items = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<T>(entry) {
            Ok(item) => items.push(item),
            Err(e) => rejected.push(Rejected { index, reason: e.to_string() }),
        }
    }
    Ok(Decoded { items, rejected })
}
