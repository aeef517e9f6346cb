use chrono::{DateTime, Utc};

use crate::constants::TIMESTAMP_FORMAT;

/// Current wall-clock time in UTC.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Renders `at` as `YYYY-MM-DDThh:mm:ss.fffZ`.
///
/// Downstream parsers rely on this exact shape, always 24 characters with
/// millisecond precision.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_format_is_zero_padded() {
        assert_eq!(
            format_timestamp(&at(2024, 1, 2, 3, 4, 5, 67)),
            "2024-01-02T03:04:05.067Z"
        );
        assert_eq!(
            format_timestamp(&at(1999, 12, 31, 23, 59, 59, 999)),
            "1999-12-31T23:59:59.999Z"
        );
    }

    #[test]
    fn test_format_truncates_to_millis() {
        let ts = NaiveDate::from_ymd_opt(2030, 6, 15)
            .unwrap()
            .and_hms_nano_opt(12, 0, 0, 123_987_654)
            .unwrap()
            .and_utc();
        assert_eq!(format_timestamp(&ts), "2030-06-15T12:00:00.123Z");
    }

    #[test]
    fn test_now_round_trips_through_format() {
        let rendered = format_timestamp(&now());
        assert_eq!(rendered.len(), 24);
        chrono::NaiveDateTime::parse_from_str(&rendered, TIMESTAMP_FORMAT)
            .expect("timestamp should parse back");
    }
}
