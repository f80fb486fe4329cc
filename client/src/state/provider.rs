//! Provider records shown in the admin table.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::load::ListItem;

/// A provider as returned by `GET /api/provider`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Identifier; numeric ids are kept as their decimal text.
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ListItem for Provider {
    fn key(&self) -> &str {
        &self.id
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) if number.is_u64() || number.is_i64() => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("invalid provider id: {other}"))),
    }
}
