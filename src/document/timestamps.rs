//! Published-timestamp parsing and display formatting
//!
//! `published`/`updated` fields are RFC 3339 in theory; in practice some
//! servers drop the zone offset entirely. Parsing is tolerant and returns
//! `None` for anything unsalvageable, so a bad timestamp degrades to an
//! omitted date line instead of a failed render.

use chrono::{DateTime, NaiveDateTime, Utc};

const DISPLAY_FORMAT: &str = "%B %d, %Y, %H:%M %p";

/// Parse a federated timestamp, tolerating a missing zone (assumed UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    // Zone-less shape some servers emit
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a timestamp for display, e.g. "January 02, 2026, 15:04 PM".
///
/// Returns an empty string for unparseable input.
pub fn format_timestamp(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2026-01-02T15:04:05Z").unwrap();
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn test_parse_with_offset() {
        let dt = parse_timestamp("2026-01-02T15:04:05+02:00").unwrap();
        assert_eq!(dt.hour(), 13);
    }

    #[test]
    fn test_parse_zoneless_assumes_utc() {
        let dt = parse_timestamp("2026-01-02T15:04:05").unwrap();
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("yesterday-ish").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_format() {
        assert_eq!(
            format_timestamp("2026-01-02T15:04:05Z"),
            "January 02, 2026, 15:04 PM"
        );
        assert_eq!(format_timestamp("not a date"), "");
    }
}
