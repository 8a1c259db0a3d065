//! Timestamp parsing and serialization for date fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::Serializer;

use crate::error_handling::DateParseError;

/// Offset-carrying layouts tried after RFC 3339 and RFC 2822.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Layouts without an offset; these are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date-bearing metadata value into a UTC timestamp.
///
/// Accepts RFC 3339, RFC 2822, ISO-8601 date-times with a `+HHMM` offset or
/// none (read as UTC), and bare `YYYY-MM-DD` dates (UTC midnight).
///
/// # Errors
///
/// Returns `DateParseError::Unrecognized` when no layout matches.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DateParseError> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Ok(parsed.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(DateParseError::Unrecognized(value.to_string()))
}

/// Parses the value chosen for `field`, logging and discarding failures.
///
/// A bad date only blanks its own field; sibling fields are unaffected.
pub(crate) fn parse_field(field: &str, value: &str) -> Option<DateTime<Utc>> {
    match parse_timestamp(value) {
        Ok(timestamp) => Some(timestamp),
        Err(e) => {
            log::warn!("Dropping {}: {}", field, e);
            None
        }
    }
}

/// Serializes an optional timestamp as ISO-8601 UTC with millisecond precision.
pub(crate) fn serialize_millis<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(timestamp) => {
            serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).single().expect("valid date")
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            parse_timestamp("2021-03-04T05:06:07Z").ok(),
            Some(utc(2021, 3, 4, 5, 6, 7))
        );
        assert_eq!(
            parse_timestamp("2021-03-04T05:06:07.250+02:00").ok(),
            Some(utc(2021, 3, 4, 3, 6, 7) + chrono::Duration::milliseconds(250))
        );
    }

    #[test]
    fn test_parse_offset_without_colon() {
        assert_eq!(
            parse_timestamp("2021-03-04T05:06:07+0100").ok(),
            Some(utc(2021, 3, 4, 4, 6, 7))
        );
    }

    #[test]
    fn test_parse_rfc2822() {
        assert_eq!(
            parse_timestamp("Thu, 04 Mar 2021 05:06:07 +0000").ok(),
            Some(utc(2021, 3, 4, 5, 6, 7))
        );
    }

    #[test]
    fn test_parse_naive_as_utc() {
        assert_eq!(
            parse_timestamp("2021-03-04T05:06:07").ok(),
            Some(utc(2021, 3, 4, 5, 6, 7))
        );
        assert_eq!(
            parse_timestamp("2021-03-04 05:06:07").ok(),
            Some(utc(2021, 3, 4, 5, 6, 7))
        );
        assert_eq!(
            parse_timestamp("2021-03-04T05:06").ok(),
            Some(utc(2021, 3, 4, 5, 6, 0))
        );
    }

    #[test]
    fn test_parse_bare_date_is_midnight_utc() {
        assert_eq!(parse_timestamp(" 2021-03-04 ").ok(), Some(utc(2021, 3, 4, 0, 0, 0)));
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert!(matches!(
            parse_timestamp("yesterday-ish"),
            Err(DateParseError::Unrecognized(ref v)) if v == "yesterday-ish"
        ));
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2021-13-45").is_err());
    }

    #[test]
    fn test_parse_field_swallows_errors() {
        assert_eq!(parse_field("publishedDate", "nope"), None);
        assert!(parse_field("publishedDate", "2020-01-01").is_some());
    }

    #[test]
    fn test_serialize_millis() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serialize_millis")]
            at: Option<DateTime<Utc>>,
        }

        let some = serde_json::to_string(&Wrapper {
            at: Some(utc(2020, 1, 2, 3, 4, 5)),
        })
        .expect("serializable");
        assert_eq!(some, r#"{"at":"2020-01-02T03:04:05.000Z"}"#);

        let none = serde_json::to_string(&Wrapper { at: None }).expect("serializable");
        assert_eq!(none, r#"{"at":null}"#);
    }
}
