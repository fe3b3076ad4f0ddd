use chrono::{DateTime, NaiveDate, Utc};

/// Accepts RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_bare_dates_as_midnight_utc() {
        let parsed = parse_date("2024-01-01").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn parses_rfc3339() {
        let parsed = parse_date("2024-06-15T10:30:00-05:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-15T15:30:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("mañana").is_none());
        assert!(parse_date("2024-13-40").is_none());
        assert!(parse_date("").is_none());
    }
}
