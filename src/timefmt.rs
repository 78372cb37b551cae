//! Wall-clock formatting shared by every persisted record.

use chrono::{Local, NaiveDateTime, Timelike};

/// Timestamp layout used across all stored documents.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, truncated to whole seconds so a value survives a
/// round trip through the stored representation unchanged.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn format_stamp(value: &NaiveDateTime) -> String {
    value.format(STAMP_FORMAT).to_string()
}

pub fn parse_stamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), STAMP_FORMAT).ok()
}

/// Serde adapter persisting timestamps in the shared stamp format.
pub mod stamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_stamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_stamp(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid timestamp `{}`", raw.trim()))
        })
    }
}
