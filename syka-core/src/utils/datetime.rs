//! Datetime serialization/deserialization helpers.
//!
//! Timestamps are shown to operators with minute precision, so they are
//! stored the same way:
//! - Serialization: `NaiveDateTime` -> `"YYYY-MM-DD HH:MM"`
//! - Deserialization: `"YYYY-MM-DD HH:MM"`, `"YYYY-MM-DD HH:MM:SS"`,
//!   ISO 8601 (`T` separator) or RFC3339 -> `NaiveDateTime`

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Display / storage format.
pub const FORMAT: &str = "%Y-%m-%d %H:%M";

/// Serializes `NaiveDateTime` as `"YYYY-MM-DD HH:MM"`.
pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.format(FORMAT).to_string())
}

/// Deserializes `NaiveDateTime` from any of the accepted layouts.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| Error::custom(format!("Invalid timestamp: {s}")))
}

/// Parses a timestamp in any accepted layout.
pub fn parse(s: &str) -> Option<NaiveDateTime> {
    const LAYOUTS: &[&str] = &[FORMAT, "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

    LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_layouts() {
        let expected = parse("2024-05-20 10:00").unwrap();
        assert_eq!(parse("2024-05-20 10:00:00"), Some(expected));
        assert_eq!(parse("2024-05-20T10:00"), Some(expected));
        assert_eq!(parse("2024-05-20T10:00:00Z"), Some(expected));
        assert_eq!(parse("yesterday"), None);
    }

    #[test]
    fn formats_with_minute_precision() {
        let dt = parse("2024-05-20 09:45:59").unwrap();
        assert_eq!(dt.format(FORMAT).to_string(), "2024-05-20 09:45");
    }
}
