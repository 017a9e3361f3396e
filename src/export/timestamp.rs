//! Timestamp formatting shared by transcripts and summaries

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

/// Human-readable format used for "Exported on" and "Last Updated" lines,
/// e.g. `3/31/2024, 10:00:05 AM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Local date-time layouts accepted for stored timestamps. `%.f` also
/// matches values without a fractional part.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-03-31T10:00:05.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Replace `:` and `.` so the timestamp can be used in file names.
pub fn sanitize_timestamp(timestamp: &str) -> String {
    timestamp.replace([':', '.'], "-")
}

/// Render a point in time in the display format.
pub fn display_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(DISPLAY_FORMAT).to_string()
}

/// Render a stored timestamp string in the display format.
///
/// RFC 3339 values are shown in local time; naive date-times (optionally
/// with fractional seconds or without seconds) are taken to be local
/// already. A bare `YYYY-MM-DD` date means UTC midnight. Anything else is
/// returned as-is.
pub fn display_timestamp(raw: &str) -> String {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return display_time(&at.with_timezone(&Local));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return naive.format(DISPLAY_FORMAT).to_string();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        return display_time(&midnight.with_timezone(&Local));
    }

    tracing::debug!("Unrecognised timestamp {:?}, showing it verbatim", raw);
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamp_has_millis_and_z_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 3, 31, 10, 0, 5).unwrap();
        assert_eq!(iso_timestamp(at), "2024-03-31T10:00:05.000Z");
    }

    #[test]
    fn sanitized_timestamp_has_no_colons_or_dots() {
        let sanitized = sanitize_timestamp("2024-03-31T10:00:05.123Z");
        assert_eq!(sanitized, "2024-03-31T10-00-05-123Z");
        assert!(!sanitized.contains(':'));
        assert!(!sanitized.contains('.'));
    }

    #[test]
    fn naive_timestamps_render_without_timezone_shift() {
        assert_eq!(display_timestamp("2024-03-31 10:00:05"), "3/31/2024, 10:00:05 AM");
        assert_eq!(display_timestamp("2024-12-01T23:15:00"), "12/1/2024, 11:15:00 PM");
    }

    #[test]
    fn fractional_seconds_are_accepted() {
        assert_eq!(display_timestamp("2024-03-31T10:00:05.123"), "3/31/2024, 10:00:05 AM");
        assert_eq!(display_timestamp("2024-03-31 14:00:05.5"), "3/31/2024, 2:00:05 PM");
    }

    #[test]
    fn minutes_without_seconds_are_accepted() {
        assert_eq!(display_timestamp("2024-03-31 10:00"), "3/31/2024, 10:00:00 AM");
        assert_eq!(display_timestamp("2024-03-31T18:45"), "3/31/2024, 6:45:00 PM");
    }

    #[test]
    fn date_only_is_utc_midnight_in_local_time() {
        let expected = display_time(
            &Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0)
                .unwrap()
                .with_timezone(&Local),
        );
        assert_eq!(display_timestamp("2024-03-31"), expected);
        assert_ne!(display_timestamp("2024-03-31"), "2024-03-31");
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(display_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn display_time_uses_twelve_hour_clock() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 7, 9).unwrap();
        assert_eq!(display_time(&at), "1/2/2024, 12:07:09 AM");
    }
}
