//! The date key for the default list.
//!
//! Today's formatted date is both the display title of the default page and
//! the identity key that routes form submissions to the item store instead
//! of a named list.

use chrono::{Local, NaiveDate};

/// Format a date as the list title, e.g. "Saturday, June 1".
#[must_use]
pub fn format_title(date: NaiveDate) -> String {
    // %-d: day of month without zero padding
    format!("{}", date.format("%A, %B %-d"))
}

/// Today's date key, re-evaluated on every call.
#[must_use]
pub fn today_title() -> String {
    format_title(Local::now().date_naive())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_day_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(format_title(date), "Saturday, June 1");
    }

    #[test]
    fn formats_double_digit_days() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_title(date), "Wednesday, December 25");
    }

    #[test]
    fn today_title_matches_today() {
        // Both calls within the same test run on the same calendar day.
        let today = Local::now().date_naive();
        assert_eq!(today_title(), format_title(today));
    }
}
