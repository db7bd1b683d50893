//! Last-updated date display

use chrono::NaiveDate;

const ISO_DATE: &str = "%Y-%m-%d";

/// Today's local date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM-DD` for a calendar date
pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Render `YYYY-MM-DD` as `"Oct 16, 2026"`.
///
/// The date is read as a calendar date with no time zone attached, so it
/// never shifts by a day. Anything that doesn't parse is returned as typed.
pub fn format_iso_date_nice(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), ISO_DATE) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Display string for an optional modification date, defaulting to `today`
pub fn last_updated_display(modified: Option<&str>, today: NaiveDate) -> String {
    match modified.filter(|d| !d.trim().is_empty()) {
        Some(iso) => format_iso_date_nice(iso),
        None => format_iso_date_nice(&to_iso(today)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_format() {
        assert_eq!(format_iso_date_nice("2026-10-16"), "Oct 16, 2026");
        assert_eq!(format_iso_date_nice("2024-01-05"), "Jan 5, 2024");
    }

    #[test]
    fn test_invalid_dates_pass_through() {
        assert_eq!(format_iso_date_nice("16/10/2026"), "16/10/2026");
        assert_eq!(format_iso_date_nice("2026-02-30"), "2026-02-30");
        assert_eq!(format_iso_date_nice(""), "");
    }

    #[test]
    fn test_last_updated_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(last_updated_display(None, today), "Oct 16, 2026");
        assert_eq!(last_updated_display(Some(""), today), "Oct 16, 2026");
        assert_eq!(
            last_updated_display(Some("2025-03-01"), today),
            "Mar 1, 2025"
        );
    }
}
