//! Serde helpers for loosely typed catalog payloads.

use serde::{Deserialize, Deserializer};

/// Deserializes a field that may be `null`, falling back to `T::default()`.
///
/// Pair with `#[serde(default)]` so an absent key is handled the same way.
///
/// # Errors
///
/// Returns an error if the value is present and not a valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
