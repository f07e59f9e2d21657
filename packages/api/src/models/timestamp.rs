//! Lenient `createdAt`/`updatedAt` parsing.
//!
//! The service emits RFC 3339 strings, but older records may carry a missing,
//! empty or non-standard value. A bad timestamp must not make the whole list
//! undecodable, so anything unparseable becomes `None`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(parse))
}

fn parse(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(s) => parse_str(s),
        // Milliseconds since the epoch
        serde_json::Value::Number(n) => DateTime::from_timestamp_millis(n.as_i64()?),
        _ => None,
    }
}

fn parse_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parses_mongo_style_iso() {
        let dt = parse_str("2024-03-05T14:07:00.123Z").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 5));
        assert_eq!((dt.hour(), dt.minute()), (14, 7));
    }

    #[test]
    fn test_parses_naive_and_epoch_millis() {
        assert!(parse_str("2024-03-05T14:07:00").is_some());
        let dt = parse(&serde_json::json!(0)).unwrap();
        assert_eq!(dt.year(), 1970);
    }

    #[test]
    fn test_garbage_is_none() {
        assert!(parse_str("yesterday").is_none());
        assert!(parse_str("").is_none());
        assert!(parse(&serde_json::json!(true)).is_none());
    }
}
