//! Serde adapters for the wire format.

use serde::{Deserialize, Deserializer};

/// Deserialize a string field where `null` means empty.
///
/// Lets blank and null values reach the validation rules instead of failing
/// in the decoder.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
