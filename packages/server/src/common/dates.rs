//! Date helpers for the Brazilian formats used by forms and reports.

use chrono::{Datelike, NaiveDate};

/// Parse a date typed by a user.
///
/// Accepts `YYYY-MM-DD` (optionally followed by a `T...` time part) and
/// `DD/MM/YYYY`.
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let date_part = input.split('T').next().unwrap_or(input);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d/%m/%Y"))
        .ok()
}

/// `DD/MM/YYYY`
pub fn format_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Completed years between two dates (0 when `to` is before `from`).
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
