//! Display formatting. Parse failures degrade to the raw input string or a
//! placeholder, never to "Invalid Date" and never to a panic.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Short,
    Long,
}

const DURATION_PLACEHOLDER: &str = "-";

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%m/%d/%Y"))
        // the legacy corpus already carries long-form dates
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%B %d, %Y"))
        .ok()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp);
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// "MMM d, yyyy" (short) or "Month d, yyyy" (long); unparseable input is
/// returned unchanged.
pub fn format_date(raw: &str, style: DateStyle) -> String {
    match parse_calendar_date(raw) {
        Some(date) => match style {
            DateStyle::Short => date.format("%b %-d, %Y").to_string(),
            DateStyle::Long => date.format("%B %-d, %Y").to_string(),
        },
        None => raw.to_string(),
    }
}

/// Short date plus hour:minute; same failure policy as [`format_date`].
pub fn format_date_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(stamp) => stamp.format("%b %-d, %Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// Whole seconds between two timestamps, rendered "<n>s". A missing or
/// malformed endpoint renders the placeholder dash.
pub fn format_duration(start: &str, end: Option<&str>) -> String {
    let (Some(start), Some(end)) = (
        parse_timestamp(start),
        end.and_then(parse_timestamp),
    ) else {
        return DURATION_PLACEHOLDER.to_string();
    };
    format!("{}s", (end - start).num_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_styles() {
        assert_eq!(format_date("2023-05-03", DateStyle::Short), "May 3, 2023");
        assert_eq!(format_date("2023-05-03", DateStyle::Long), "May 3, 2023");
        assert_eq!(
            format_date("2023-11-21", DateStyle::Long),
            "November 21, 2023"
        );
        assert_eq!(format_date("11/21/2023", DateStyle::Short), "Nov 21, 2023");
    }

    #[test]
    fn rfc3339_input_formats_as_its_calendar_date() {
        assert_eq!(
            format_date("2023-05-03T10:30:00Z", DateStyle::Short),
            "May 3, 2023"
        );
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_date("not-a-date", DateStyle::Short), "not-a-date");
        assert_eq!(format_date_time("garbage"), "garbage");
    }

    #[test]
    fn date_time_includes_clock() {
        assert_eq!(
            format_date_time("2023-05-03T10:30:00Z"),
            "May 3, 2023 10:30"
        );
    }

    #[test]
    fn duration_renders_seconds_or_dash() {
        assert_eq!(
            format_duration("2023-05-03T10:30:00Z", Some("2023-05-03T10:30:42Z")),
            "42s"
        );
        assert_eq!(format_duration("2023-05-03T10:30:00Z", None), "-");
        assert_eq!(format_duration("bad", Some("2023-05-03T10:30:42Z")), "-");
        assert_eq!(format_duration("2023-05-03T10:30:00Z", Some("bad")), "-");
    }
}
