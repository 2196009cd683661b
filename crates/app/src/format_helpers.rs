//! Display formatting for the console pages.

use chrono::{DateTime, Utc};

/// "Jan 20, 2026".
pub fn format_date_human(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Specialties as one comma-separated line, or a dash when there are none.
pub fn format_specialties(specialties: &[String]) -> String {
    if specialties.is_empty() {
        "\u{2014}".to_string()
    } else {
        specialties.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_is_month_day_year() {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 21, 35, 0).unwrap();
        assert_eq!(format_date_human(&at), "Jan 5, 2026");
    }

    #[test]
    fn specialties_join_with_commas() {
        let list = vec!["Family Law".to_string(), "Divorce".to_string()];
        assert_eq!(format_specialties(&list), "Family Law, Divorce");
        assert_eq!(format_specialties(&[]), "\u{2014}");
    }
}
