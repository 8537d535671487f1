//! Flexible date parsing for date inputs.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static RELATIVE_DAYS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-])(\d+)d$").expect("valid relative date regex"));
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

const OUTPUT_FORMAT: &str = "%Y-%m-%d";

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 7] = [
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%Y.%m.%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Resolves a user-supplied date into `YYYY-MM-DD`.
///
/// Accepts `hoy`/`today`, `ayer`/`yesterday`, relative `+Nd`/`-Nd` offsets
/// from `today`, ISO dates (returned unchanged) and a handful of common
/// absolute formats. Returns an empty string when nothing matches.
pub fn parse_flexible_date(raw: &str, today: NaiveDate) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lowered = trimmed.to_lowercase();

    match lowered.as_str() {
        "hoy" | "today" => return format(today),
        "ayer" | "yesterday" => {
            return today
                .checked_sub_days(Days::new(1))
                .map(format)
                .unwrap_or_default()
        }
        _ => {}
    }

    if let Some(caps) = RELATIVE_DAYS.captures(&lowered) {
        let Ok(days) = caps[2].parse::<u64>() else {
            return String::new();
        };
        let shifted = if &caps[1] == "+" {
            today.checked_add_days(Days::new(days))
        } else {
            today.checked_sub_days(Days::new(days))
        };
        return shifted.map(format).unwrap_or_default();
    }

    if ISO_DATE.is_match(&lowered) {
        return lowered;
    }

    parse_absolute(trimmed).map(format).unwrap_or_default()
}

fn parse_absolute(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        })
}

fn format(date: NaiveDate) -> String {
    date.format(OUTPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 10).unwrap()
    }

    #[test]
    fn today_keywords() {
        assert_eq!(parse_flexible_date("hoy", today()), "2025-09-10");
        assert_eq!(parse_flexible_date(" Today ", today()), "2025-09-10");
    }

    #[test]
    fn yesterday_keywords() {
        assert_eq!(parse_flexible_date("ayer", today()), "2025-09-09");
        assert_eq!(parse_flexible_date("yesterday", today()), "2025-09-09");
    }

    #[test]
    fn relative_offsets() {
        assert_eq!(parse_flexible_date("+3d", today()), "2025-09-13");
        assert_eq!(parse_flexible_date("-10d", today()), "2025-08-31");
        assert_eq!(parse_flexible_date("+0d", today()), "2025-09-10");
    }

    #[test]
    fn iso_dates_pass_through() {
        assert_eq!(parse_flexible_date("2025-09-01", today()), "2025-09-01");
    }

    #[test]
    fn common_absolute_formats() {
        assert_eq!(parse_flexible_date("2024/02/29", today()), "2024-02-29");
        assert_eq!(parse_flexible_date("12/25/2024", today()), "2024-12-25");
        assert_eq!(parse_flexible_date("March 5, 2024", today()), "2024-03-05");
        assert_eq!(
            parse_flexible_date("2024-03-05T23:30:00+00:00", today()),
            "2024-03-05"
        );
    }

    #[test]
    fn garbage_is_empty() {
        assert_eq!(parse_flexible_date("not a date", today()), "");
        assert_eq!(parse_flexible_date("", today()), "");
    }
}
