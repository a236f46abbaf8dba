//! Timestamp interchange
//!
//! Timestamps travel as ISO-8601 UTC strings with millisecond precision
//! (`2024-01-01T00:00:00.000Z`), the same shape a browser `Date` produces.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::entity::{DomainError, DomainResult};

pub type Timestamp = DateTime<Utc>;

const ISO_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Naive layouts accepted when no offset is given, read as UTC
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

pub fn now() -> Timestamp {
    Utc::now()
}

pub fn format_iso(ts: &Timestamp) -> String {
    ts.format(ISO_MILLIS).to_string()
}

pub fn parse_iso(raw: &str) -> DomainResult<Timestamp> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::InvalidInput(format!("invalid timestamp '{}'", raw)))
}

/// serde adapter for `Timestamp`
pub(crate) mod iso_millis {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_iso, parse_iso, Timestamp};

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_iso(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_iso(&raw).map_err(serde::de::Error::custom)
    }
}

/// serde adapter for `Option<Timestamp>`; `null` reads as `None`
pub(crate) mod iso_millis_option {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_iso, parse_iso, Timestamp};

    pub fn serialize<S: Serializer>(ts: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => serializer.serialize_str(&format_iso(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_iso(&raw).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_keeps_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_iso(&ts), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = parse_iso("2024-01-01T02:00:00.250+02:00").unwrap();
        assert_eq!(format_iso(&ts), "2024-01-01T00:00:00.250Z");
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let ts = parse_iso("2024-05-06T07:08").unwrap();
        assert_eq!(format_iso(&ts), "2024-05-06T07:08:00.000Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_iso("yesterday"), Err(DomainError::InvalidInput(_))));
    }
}
