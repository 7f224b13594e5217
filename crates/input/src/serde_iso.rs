//! Serialization helpers for UTC timestamps.
//!
//! Renders `DateTime<Utc>` as ISO-8601 with microsecond precision and an
//! explicit `+00:00` offset, e.g. `2024-01-01T12:00:00.000000+00:00`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Formats a timestamp the way every record in this crate exposes it.
pub fn iso8601(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Serialize a UTC timestamp as an ISO-8601 string.
pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&iso8601(ts))
}

/// Deserialize a UTC timestamp from any RFC 3339 string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn renders_micros_with_offset() {
        let Some(date) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
            panic!("invalid date components");
        };
        let Some(date_time) = date.and_hms_micro_opt(12, 30, 0, 42) else {
            panic!("invalid time components");
        };
        let ts = DateTime::<Utc>::from_naive_utc_and_offset(date_time, Utc);
        assert_eq!(iso8601(&ts), "2024-01-01T12:30:00.000042+00:00");
    }
}
