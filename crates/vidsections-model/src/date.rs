use chrono::NaiveDate;

/// Fallback shown when an upload date is absent or unparseable.
pub const DATE_UNKNOWN: &str = "Date unknown";

/// Format an 8-digit `YYYYMMDD` upload date as "Month DD, YYYY".
///
/// Total: anything absent, not exactly 8 characters, or not a valid
/// calendar date yields [`DATE_UNKNOWN`]. Never panics.
pub fn format_upload_date(upload_date: Option<&str>) -> String {
    let Some(raw) = upload_date else {
        return DATE_UNKNOWN.to_string();
    };
    if raw.len() != 8 {
        return DATE_UNKNOWN.to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y%m%d") {
        Ok(date) => date.format("%B %d, %Y").to_string(),
        Err(_) => DATE_UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_valid_dates() {
        assert_eq!(format_upload_date(Some("20240101")), "January 01, 2024");
        assert_eq!(format_upload_date(Some("20231225")), "December 25, 2023");
        assert_eq!(format_upload_date(Some("20000229")), "February 29, 2000");
    }

    #[test]
    fn test_format_round_trip() {
        // The human-readable form re-parses to the same calendar date
        for raw in ["20240101", "19991231", "20230615", "20160229"] {
            let formatted = format_upload_date(Some(raw));
            let reparsed = NaiveDate::parse_from_str(&formatted, "%B %d, %Y").unwrap();
            let original = NaiveDate::parse_from_str(raw, "%Y%m%d").unwrap();
            assert_eq!(reparsed, original, "round trip failed for {raw}");
        }
    }

    #[test]
    fn test_format_missing_or_malformed() {
        assert_eq!(format_upload_date(None), DATE_UNKNOWN);
        assert_eq!(format_upload_date(Some("")), DATE_UNKNOWN);
        assert_eq!(format_upload_date(Some("2024")), DATE_UNKNOWN);
        assert_eq!(format_upload_date(Some("202401011")), DATE_UNKNOWN);
        assert_eq!(format_upload_date(Some("2024010a")), DATE_UNKNOWN);
        // 8 digits but not a calendar date
        assert_eq!(format_upload_date(Some("20241301")), DATE_UNKNOWN);
        assert_eq!(format_upload_date(Some("20230230")), DATE_UNKNOWN);
    }
}
