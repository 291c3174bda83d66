//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::NaiveDate;

/// Format an ISO date string for display: "2025-06-09" -> "09.06.2025"
pub fn format_date(date_str: &str) -> String {
    if let Some((year, rest)) = date_str.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Today's date as the `yyyy-mm-dd` value a date input expects for its
/// `min` attribute.
pub fn today_input_value(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-06-09"), "09.06.2025");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_today_input_value() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(today_input_value(today), "2025-06-02");
    }
}
