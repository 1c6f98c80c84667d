/// Utilities for date formatting
///
/// Review dates come from the backend as ISO strings, either a full RFC 3339
/// timestamp or a bare date.
use chrono::{DateTime, NaiveDate};

/// Format ISO date string like "15 Mar 2024"
/// Example: "2024-03-15T14:02:26.123Z" -> "15 Mar 2024"
pub fn format_review_date(date_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return dt.format("%-d %b %Y").to_string();
    }
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return date.format("%-d %b %Y").to_string();
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_review_date() {
        assert_eq!(format_review_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
        assert_eq!(format_review_date("2024-12-05"), "5 Dec 2024");
        assert_eq!(format_review_date("2024-01-09T08:00:00"), "9 Jan 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_review_date("yesterday"), "yesterday");
    }
}
