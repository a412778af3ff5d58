//! Forgiving deserializers for optional fixture fields.
//!
//! A value of the wrong shape becomes `None`, so one odd field only stops that
//! record from matching the related selector instead of failing the whole file.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A string, or a number written without quotes (`"year": 2024`).
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A non-negative integer, or a string holding one (`"volume": "29"`).
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
