use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

use crate::services::validation::sanitize_string;

/// Calendar day named by `s`: a `YYYY-MM-DD` date, or a timestamp whose
/// calendar day (in its own offset) is taken.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Storage form of a booking's preferred date. Parseable input becomes
/// `YYYY-MM-DD` so availability lookups match on the calendar day; anything
/// else is kept sanitized as given.
pub fn normalize_preferred_date(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;
    match parse_calendar_date(raw) {
        Some(date) => Some(format_calendar_date(date)),
        None => {
            tracing::warn!(preferred_date = %raw, "storing unparseable preferred date as given");
            Some(sanitize_string(raw)).filter(|s| !s.is_empty())
        }
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekdays from `from` (inclusive) over the next `horizon_days` days.
pub fn bookable_dates(from: NaiveDate, horizon_days: u32) -> Vec<NaiveDate> {
    (0..u64::from(horizon_days))
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .filter(|date| !is_weekend(*date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_calendar_date("2024-02-15"), Some(date("2024-02-15")));
        assert_eq!(parse_calendar_date(" 2024-02-15 "), Some(date("2024-02-15")));
    }

    #[test]
    fn test_parse_timestamps_take_calendar_day() {
        assert_eq!(
            parse_calendar_date("2024-02-15T00:00:00.000Z"),
            Some(date("2024-02-15"))
        );
        assert_eq!(
            parse_calendar_date("2024-02-15T23:30:00+13:00"),
            Some(date("2024-02-15"))
        );
        assert_eq!(
            parse_calendar_date("2024-02-15T10:00:00"),
            Some(date("2024-02-15"))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("next tuesday"), None);
        assert_eq!(parse_calendar_date("2024-02-30"), None);
    }

    #[test]
    fn test_normalize_preferred_date() {
        assert_eq!(normalize_preferred_date(None), None);
        assert_eq!(normalize_preferred_date(Some("")), None);
        assert_eq!(
            normalize_preferred_date(Some("2024-02-15T09:00:00Z")),
            Some("2024-02-15".to_string())
        );
        assert_eq!(
            normalize_preferred_date(Some(" <soon> ")),
            Some("soon".to_string())
        );
        assert_eq!(normalize_preferred_date(Some("<>")), None);
    }

    #[test]
    fn test_bookable_dates_skip_weekends() {
        // 2025-06-13 is a Friday
        let dates = bookable_dates(date("2025-06-13"), 4);
        assert_eq!(dates, vec![date("2025-06-13"), date("2025-06-16")]);
    }

    #[test]
    fn test_bookable_dates_horizon() {
        let dates = bookable_dates(date("2025-06-16"), 90);
        assert!(dates.iter().all(|d| !is_weekend(*d)));
        assert!(dates.iter().all(|d| *d < date("2025-06-16") + Days::new(90)));
        // 90 days from a Monday spans 12 full weeks plus 6 days, 5 of them weekdays
        assert_eq!(dates.len(), 65);
        assert!(bookable_dates(date("2025-06-16"), 0).is_empty());
    }
}
