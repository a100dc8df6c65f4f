//! Deserialization helpers for request payloads.
//!
//! Text is trimmed while it is decoded so that validation rules see the value
//! that will be stored. Optional fields using these helpers need
//! `#[serde(default)]`.

use serde::{Deserialize, Deserializer};

fn trim_owned(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

/// Decodes a string with surrounding whitespace removed.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(trim_owned)
}

/// Decodes an optional string with surrounding whitespace removed.
pub fn trimmed_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(trim_owned))
}

/// Like [`trimmed_option`], but a blank value decodes as `None`.
pub fn non_blank_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(trimmed_option(deserializer)?.filter(|s| !s.is_empty()))
}
