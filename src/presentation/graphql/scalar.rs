// src/presentation/graphql/scalar.rs
use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{DateTime, SecondsFormat, Utc};

/// A date and time, represented as an ISO-8601 string.
///
/// Serialization always emits millisecond precision with a `Z` suffix
/// (`2024-03-01T12:00:00.000Z`). Parsing accepts any RFC 3339 offset and
/// normalizes to UTC; malformed input surfaces as the framework's usual
/// input-value error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub DateTime<Utc>);

#[Scalar(name = "Date")]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(raw) => {
                tracing::debug!(value = %raw, "parsing Date scalar");
                let parsed = DateTime::parse_from_rfc3339(&raw).map_err(InputValueError::custom)?;
                Ok(Self(parsed.with_timezone(&Utc)))
            }
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_milliseconds_and_z_suffix() {
        let date = Date(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        assert_eq!(
            date.to_value(),
            Value::String("2024-03-01T12:00:00.000Z".into())
        );
    }

    #[test]
    fn parses_utc_strings() {
        let parsed = Date::parse(Value::String("2024-06-01T09:00:00.000Z".into())).unwrap();
        assert_eq!(parsed.0, Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn parses_offset_strings_to_the_same_instant() {
        let parsed = Date::parse(Value::String("2024-06-01T04:00:00.000-05:00".into())).unwrap();
        assert_eq!(parsed.0, Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(Date::parse(Value::String("not-a-date".into())).is_err());
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(Date::parse(Value::Boolean(true)).is_err());
    }
}
