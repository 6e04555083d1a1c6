//! Deserializers for form payloads coming from browsers, where a field can
//! hold any JSON value regardless of what the form meant to send.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keeps JSON strings, reads every other value (including `null`) as missing.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Only the JSON literal `true` is true.
pub fn strict_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}
