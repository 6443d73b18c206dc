//! RFC 3339 timestamp helpers.
//!
//! Timestamp fields in both packages are RFC 3339 strings; an empty string
//! means "not set".

use chrono::{DateTime, SecondsFormat, Utc};

use crate::SchemaError;

/// Format a UTC instant the way timestamp fields are written.
#[must_use]
pub fn to_rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time formatted for a timestamp field.
#[must_use]
pub fn now_rfc3339() -> String {
    to_rfc3339(Utc::now())
}

/// Parse a timestamp field. Empty input yields `Ok(None)`.
pub fn parse_rfc3339(value: &str) -> Result<Option<DateTime<Utc>>, SchemaError> {
    if value.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|e| SchemaError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Format an optional instant, using the empty string for `None`.
#[must_use]
pub fn optional_rfc3339(at: Option<DateTime<Utc>>) -> String {
    at.map(to_rfc3339).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_with_millis_and_z() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(to_rfc3339(at), "2025-03-01T12:30:00.000Z");
    }

    #[test]
    fn parses_offsets_into_utc() {
        let parsed = parse_rfc3339("2025-03-01T18:00:00+05:30").unwrap().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn empty_is_unset() {
        assert!(parse_rfc3339("").unwrap().is_none());
        assert_eq!(optional_rfc3339(None), "");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            parse_rfc3339("last tuesday"),
            Err(SchemaError::InvalidTimestamp { .. })
        ));
    }
}
