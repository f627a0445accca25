/// Custom scalar coercion
///
/// The DateTime scalar travels as an ISO-8601 string. Parse failures on
/// input fail the whole request with a scalar-coercion error before any
/// resolver runs.

use crate::clinic::types::DateTime;
use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

/// ISO-8601 DateTime string
#[Scalar(name = "DateTime")]
impl ScalarType for DateTime {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(s) => parse_iso(&s).ok_or_else(|| {
                InputValueError::custom(format!("invalid ISO-8601 datetime: \"{s}\""))
            }),
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_storage())
    }
}

/// Accepts full RFC-3339 timestamps and bare dates (date-of-birth pickers
/// submit "1980-03-14"), which parse as midnight UTC
fn parse_iso(s: &str) -> Option<DateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(DateTime(dt.with_timezone(&Utc)));
    }
    s.parse::<NaiveDate>()
        .ok()
        .map(|d| DateTime(Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rfc3339_and_normalizes_to_utc() {
        let dt = parse_iso("2026-03-01T10:30:00+02:00").unwrap();
        assert_eq!(dt.to_storage(), "2026-03-01T08:30:00.000Z");
    }

    #[test]
    fn test_parses_bare_date_as_midnight_utc() {
        let dt = parse_iso("1980-03-14").unwrap();
        assert_eq!(dt.to_storage(), "1980-03-14T00:00:00.000Z");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_iso("not-a-date").is_none());
        assert!(parse_iso("2026-13-40").is_none());
    }
}
