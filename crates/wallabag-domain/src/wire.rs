//! Lenient deserializers for the loosely typed fields of Wallabag payloads.

use chrono::{DateTime, FixedOffset};
use serde::{de, Deserialize, Deserializer};

/// Wallabag's native timestamp layout (`2023-01-01T10:00:00+0000`).
const WALLABAG_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse a timestamp in RFC 3339 or Wallabag's colon-less offset form.
pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).or_else(|_| DateTime::parse_from_str(s, WALLABAG_TIMESTAMP))
}

pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

/// Booleans arrive as `true`/`false`, `0`/`1` or `null`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Int(value)) => value != 0,
        None => false,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    Str(String),
    Int(i64),
}

/// Optional text that some Wallabag versions send as a bare number.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Text>::deserialize(deserializer)?.map(|text| match text {
        Text::Str(value) => value,
        Text::Int(value) => value.to_string(),
    }))
}
