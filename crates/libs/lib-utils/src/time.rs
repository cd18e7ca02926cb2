//! # Time Utilities
//!
//! Date formatting for display records using chrono.

use chrono::{Datelike, NaiveDate, Utc};

const LONG_DATE: &str = "%B %-d, %Y";
const MONTH_YEAR: &str = "%B %Y";

/// Current calendar year (UTC), used by the footer copyright line.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Format a date the way the views show it, e.g. `March 10, 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE).to_string()
}

/// Month and year only, e.g. `January 2025` for "Joined" lines.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format(MONTH_YEAR).to_string()
}

/// Format an inclusive range, e.g. `March 10, 2025 - June 10, 2025`.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", format_long_date(start), format_long_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "March 5, 2025");
    }

    #[test]
    fn test_format_month_year() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(format_month_year(date), "January 2025");
    }

    #[test]
    fn test_format_date_range() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert_eq!(format_date_range(start, end), "March 10, 2025 - June 10, 2025");
    }
}
