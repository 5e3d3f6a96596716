//! Calendar arithmetic shared by the recurrence engine.
//!
//! Everything here is a pure function over plain calendar fields. Months are
//! passed 0-based to [`days_in_month`] so callers can feed it
//! `NaiveDate::month0()` directly.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// Left-pads `value` with zeros to `size` digits.
pub fn fill_zero(value: u32, size: usize) -> String {
    format!("{:0>width$}", value, width = size)
}

/// Formats a date as `YYYY-MM-DD`. Years 0-9999 are zero-padded to four digits.
pub fn format_date(date: NaiveDate) -> String {
    let year = match u32::try_from(date.year()) {
        Ok(year) => fill_zero(year, 4),
        Err(_) => date.year().to_string(),
    };
    format!("{}-{}-{}", year, fill_zero(date.month(), 2), fill_zero(date.day(), 2))
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = value.trim();
    // chrono accepts unpadded fields for %m/%d, the stored format does not.
    if trimmed.len() != 10 {
        return Err(CoreError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(value.to_string()))
}

#[inline]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the 0-based `month_index` of `year`.
pub fn days_in_month(year: i32, month_index: u32) -> u32 {
    match month_index {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}
