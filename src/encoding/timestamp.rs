// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ISO-8601 timestamps on the wire.
//!
//! Written as RFC 3339 with a numeric offset (`2023-06-18T15:00:00+00:00`),
//! fractional seconds only when non-zero. Any RFC 3339 form is accepted on
//! read, `Z` included. Use with `#[serde(with = "timestamp")]`, or
//! `#[serde(default, with = "timestamp::option")]` for optional fields.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Format a timestamp as its wire text.
pub fn format(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Parse wire text into a timestamp.
pub fn parse(text: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text)
}

/// Write a timestamp.
pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

/// Read a timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text).map_err(|err| de::Error::custom(format!("invalid timestamp `{text}`: {err}")))
}

/// Optional timestamps.
pub mod option {
    use super::*;

    /// Write an optional timestamp.
    pub fn serialize<S>(value: &Option<DateTime<FixedOffset>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Read an optional timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| {
                parse(&text)
                    .map_err(|err| de::Error::custom(format!("invalid timestamp `{text}`: {err}")))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "super")]
        at: DateTime<FixedOffset>,
        #[serde(default, with = "option", skip_serializing_if = "Option::is_none")]
        until: Option<DateTime<FixedOffset>>,
    }

    #[test]
    fn test_format_uses_numeric_offset() {
        let value = parse("2023-06-18T15:00:00Z").unwrap();
        assert_eq!(format(&value), "2023-06-18T15:00:00+00:00");
    }

    #[test]
    fn test_format_keeps_offset_and_fraction() {
        let value = parse("2023-06-18T09:00:00.250-06:00").unwrap();
        assert_eq!(format(&value), "2023-06-18T09:00:00.250-06:00");
    }

    #[test]
    fn test_equality_compares_instants() {
        let utc = parse("2023-06-18T15:00:00Z").unwrap();
        let central = parse("2023-06-18T09:00:00-06:00").unwrap();
        assert_eq!(utc, central);
    }

    #[test]
    fn test_optional_absent_and_present() {
        let absent: Stamped = serde_json::from_str(r#"{"at": "2024-06-18T14:37:31Z"}"#).unwrap();
        assert!(absent.until.is_none());
        assert_eq!(
            serde_json::to_string(&absent).unwrap(),
            r#"{"at":"2024-06-18T14:37:31+00:00"}"#
        );

        let present: Stamped = serde_json::from_str(
            r#"{"at": "2024-06-18T14:36:00+00:00", "until": "2024-06-18T14:37:00+00:00"}"#,
        )
        .unwrap();
        assert_eq!(present.until.map(|t| format(&t)).as_deref(), Some("2024-06-18T14:37:00+00:00"));
    }

    #[test]
    fn test_invalid_timestamp_is_data_error() {
        let err = serde_json::from_str::<Stamped>(r#"{"at": "yesterday"}"#).unwrap_err();
        assert!(err.is_data());
        assert!(err.to_string().contains("invalid timestamp `yesterday`"));
    }
}
