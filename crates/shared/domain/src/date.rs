//! Lenient date parsing for request bodies.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer};

use crate::constants::DATE_OF_BIRTH_SEARCH_FORMAT;

/// Parse an RFC 3339 timestamp, a zone-less `yyyy-MM-ddTHH:mm:ss`, or a bare
/// `yyyy-MM-dd` date (taken as midnight UTC).
pub fn parse_date_time(text: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Ok(date_time.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, DATE_OF_BIRTH_SEARCH_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| format!("invalid date `{}`, expected RFC 3339 or yyyy-MM-dd", text))
}

/// Serde adapter for optional dates; `null` and a missing field both read as `None`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) => parse_date_time(&text).map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}
