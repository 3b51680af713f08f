use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a server timestamp into a calendar date.
///
/// Accepts RFC 3339 (the date is taken in the timestamp's own offset),
/// naive `YYYY-MM-DDTHH:MM:SS[.fff]` and bare `YYYY-MM-DD`.
pub fn parse_server_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Render an optional server timestamp as `DD/MM/YYYY`.
///
/// Missing values render as `N/A`; values that do not parse are shown as-is.
pub fn format_display_date(raw: Option<&str>) -> String {
    match raw {
        None => "N/A".to_string(),
        Some(s) if s.trim().is_empty() => "N/A".to_string(),
        Some(s) => match parse_server_date(s) {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => s.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date_variants() {
        assert_eq!(format_display_date(None), "N/A");
        assert_eq!(format_display_date(Some("")), "N/A");
        assert_eq!(format_display_date(Some("2024-12-05")), "05/12/2024");
        assert_eq!(
            format_display_date(Some("2024-12-05T08:15:00.123")),
            "05/12/2024"
        );
        assert_eq!(
            format_display_date(Some("2024-12-05T23:15:00-03:00")),
            "05/12/2024"
        );
        assert_eq!(format_display_date(Some("ontem")), "ontem");
    }
}
