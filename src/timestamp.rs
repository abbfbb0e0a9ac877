//! Timestamp encoding for the persisted task file.
//!
//! Unset timestamps are stored as the zero instant `0001-01-01T00:00:00Z`
//! so files stay readable by earlier versions that always wrote every field.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Default display format, e.g. `05-01-2024 14:03:59 Wed`.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%m-%d-%Y %H:%M:%S %a";

/// The zero instant used on disk for "not set".
pub fn zero() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn is_zero(value: &DateTime<Utc>) -> bool {
    *value == zero()
}

/// Format a timestamp for table output in local time; unset shows `-`.
pub fn display(value: Option<&DateTime<Utc>>, format: &str) -> String {
    match value {
        Some(ts) => ts.with_timezone(&Local).format(format).to_string(),
        None => "-".to_string(),
    }
}

/// `serde(with = ...)` adapter mapping `None` to the zero instant and back.
pub mod optional {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ts = value.unwrap_or_else(zero);
        serializer.serialize_str(&ts.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<DateTime<Utc>> = Option::deserialize(deserializer)?;
        Ok(raw.filter(|ts| !is_zero(ts)))
    }
}

/// `serde(with = ...)` adapter for required timestamps, written the same way.
pub mod required {
    use super::*;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }
}
