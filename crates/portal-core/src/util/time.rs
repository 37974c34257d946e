//! Timestamp formatting.
//!
//! The API returns timestamps either as RFC 3339 strings or as
//! `YYYY-MM-DD HH:MM:SS` without an offset. Unparseable or empty input
//! renders as `"-"`.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Placeholder rendered for missing or unparseable timestamps.
pub const PLACEHOLDER: &str = "-";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;

/// Parses an API timestamp.
///
/// Naive timestamps are interpreted as UTC.
pub fn parse_timestamp(input: &str) -> Option<DateTime<FixedOffset>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
}

/// Formats a timestamp as `YYYY/M/D HH:MM:SS` in its own offset.
///
/// # Example
///
/// ```
/// use portal_core::util::time::format_time;
///
/// assert_eq!(format_time("2024-01-05 14:03:02"), "2024/1/5 14:03:02");
/// assert_eq!(format_time(""), "-");
/// ```
pub fn format_time(input: &str) -> String {
    render(input, "%Y/%-m/%-d %H:%M:%S")
}

/// Formats a timestamp as `YYYY/M/D`.
pub fn format_date(input: &str) -> String {
    render(input, "%Y/%-m/%-d")
}

fn render(input: &str, fmt: &str) -> String {
    if input.trim().is_empty() {
        return PLACEHOLDER.to_string();
    }
    match parse_timestamp(input) {
        Some(dt) => dt.format(fmt).to_string(),
        None => {
            log::warn!("Unparseable timestamp: {input:?}");
            PLACEHOLDER.to_string()
        }
    }
}

/// Describes how long ago `then` was relative to `now`.
///
/// Times in the future read as "just now".
pub fn relative_time<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Utc>) -> String {
    let diff = now.timestamp() - then.timestamp();
    if diff < MINUTE {
        return "just now".to_string();
    }
    let (count, unit) = if diff < HOUR {
        (diff / MINUTE, "minute")
    } else if diff < DAY {
        (diff / HOUR, "hour")
    } else if diff < WEEK {
        (diff / DAY, "day")
    } else if diff < MONTH {
        (diff / WEEK, "week")
    } else {
        (diff / MONTH, "month")
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// Like [`relative_time`] but starting from an API timestamp string.
pub fn relative_time_str(input: &str, now: &DateTime<Utc>) -> String {
    match parse_timestamp(input) {
        Some(dt) => relative_time(&dt, now),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2024-01-05T14:03:02+08:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn test_parse_naive() {
        assert!(parse_timestamp("2024-01-05 14:03:02").is_some());
        assert!(parse_timestamp("2024-01-05T14:03:02").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("   ").is_none());
    }

    #[test]
    fn test_format_time_keeps_offset() {
        assert_eq!(
            format_time("2024-01-05T14:03:02+08:00"),
            "2024/1/5 14:03:02"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-11-25 08:00:00"), "2024/11/25");
        assert_eq!(format_date("garbage"), "-");
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = now();
        assert_eq!(relative_time(&(now - Duration::seconds(30)), &now), "just now");
        assert_eq!(relative_time(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(relative_time(&(now - Duration::minutes(5)), &now), "5 minutes ago");
        assert_eq!(relative_time(&(now - Duration::hours(3)), &now), "3 hours ago");
        assert_eq!(relative_time(&(now - Duration::days(2)), &now), "2 days ago");
        assert_eq!(relative_time(&(now - Duration::days(14)), &now), "2 weeks ago");
        assert_eq!(relative_time(&(now - Duration::days(65)), &now), "2 months ago");
    }

    #[test]
    fn test_relative_time_future_is_just_now() {
        let now = now();
        assert_eq!(relative_time(&(now + Duration::hours(1)), &now), "just now");
    }

    #[test]
    fn test_relative_time_str() {
        let now = now();
        assert_eq!(relative_time_str("2024-06-01 11:00:00", &now), "1 hour ago");
        assert_eq!(relative_time_str("", &now), "-");
    }
}
