//! Field level fallbacks for persisted data.
//!
//! Persisted state may have been written by an older or newer client.
//! A field that can not be read takes its default instead of
//! invalidating the whole tree.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a field, falling back to `T::default()` if the value is invalid.
///
/// Use together with `#[serde(default)]` so missing fields are also defaulted.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    match T::deserialize(value) {
        Ok(field) => Ok(field),
        Err(err) => {
            tracing::warn!(?err, "invalid persisted field, using default");
            Ok(T::default())
        }
    }
}

#[cfg(test)]
#[path = "./lenient_test.rs"]
mod lenient_test;
