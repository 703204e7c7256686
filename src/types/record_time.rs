use chrono::{DateTime, NaiveDateTime};
use serde_derive::{Deserialize, Serialize};

/// A recording timestamp cell, kept both as raw text and as a parsed value.
///
/// Topic files store timestamps as integer nanoseconds since the Unix epoch.
/// `RecordTime` keeps the cell exactly as it appeared (`text`) and, when the
/// cell parses, the timezone-unaware instant it denotes (`value`). The value
/// is **naive**: no offset is attached, and none is implied by the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordTime {
    /// The cell as read from the file, e.g. `"1554325034123456789"`.
    pub text: String,

    /// Parsed instant, or `None` when the cell is empty or not a number.
    pub value: Option<NaiveDateTime>,
}

impl RecordTime {
    /// Builds a `RecordTime` from one timestamp token.
    ///
    /// The token is interpreted as nanoseconds since the Unix epoch. Tokens
    /// that do not parse as an integer leave `value` at `None`; the raw text
    /// is kept either way.
    pub fn from_token(token: &str) -> Self {
        let value = token.trim().parse::<i64>().ok().and_then(|nanos| {
            let secs = nanos.div_euclid(1_000_000_000);
            let subsec = nanos.rem_euclid(1_000_000_000) as u32;
            DateTime::from_timestamp(secs, subsec).map(|dt| dt.naive_utc())
        });
        Self {
            text: token.to_string(),
            value,
        }
    }

    /// Formats the timestamp as `%Y-%m-%d %H:%M:%S%.3f`.
    ///
    /// Falls back to the raw cell text when the value did not parse, so a
    /// malformed cell still renders as what the file contained.
    pub fn to_display_string(&self) -> String {
        match self.value {
            Some(v) => v.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            None => self.text.clone(),
        }
    }

    /// Resets both the raw text and the parsed value.
    pub fn clear(&mut self) {
        self.text.clear();
        self.value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nanoseconds_since_epoch() {
        let t = RecordTime::from_token("1500000000");
        assert_eq!(t.text, "1500000000");
        assert_eq!(t.to_display_string(), "1970-01-01 00:00:01.500");
    }

    #[test]
    fn parses_full_scale_timestamp() {
        // 2019-04-03 21:37:14.123456789 UTC
        let t = RecordTime::from_token("1554327434123456789");
        assert_eq!(t.to_display_string(), "2019-04-03 21:37:14.123");
    }

    #[test]
    fn small_timestamp_rounds_down_to_epoch() {
        let t = RecordTime::from_token("100");
        assert_eq!(t.to_display_string(), "1970-01-01 00:00:00.000");
    }

    #[test]
    fn non_numeric_token_falls_back_to_raw_text() {
        let t = RecordTime::from_token("n/a");
        assert!(t.value.is_none());
        assert_eq!(t.to_display_string(), "n/a");
    }

    #[test]
    fn empty_token_keeps_empty_text() {
        let t = RecordTime::from_token("");
        assert!(t.value.is_none());
        assert_eq!(t.to_display_string(), "");
    }

    #[test]
    fn test_clear() {
        let mut t = RecordTime::from_token("1500000000");
        t.clear();
        assert_eq!(t, RecordTime::default());
    }
}
