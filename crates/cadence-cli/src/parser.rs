use anyhow::{anyhow, Result};
use cadence_core::dates::parse_date;
use cadence_core::models::RepeatType;
use chrono::{Local, NaiveDate, NaiveTime};
use chrono_english::{parse_date_string, Dialect};

/// Accepts `YYYY-MM-DD` or a relative phrase such as "tomorrow" or "next friday".
pub fn parse_date_arg(date_str: &str) -> Result<NaiveDate> {
    if let Ok(date) = parse_date(date_str) {
        return Ok(date);
    }
    parse_date_string(date_str, Local::now(), Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", date_str, e))
}

/// Normalizes `H:MM` / `HH:MM` to `HH:MM`.
pub fn parse_time_arg(time_str: &str) -> Result<String> {
    NaiveTime::parse_from_str(time_str.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| anyhow!("Invalid time '{}': expected HH:MM", time_str))
}

pub fn parse_repeat_type(value: &str) -> Result<RepeatType, String> {
    serde_plain::from_str::<RepeatType>(&value.to_lowercase())
        .map_err(|_| format!("invalid repeat type '{}' (none, daily, weekly, monthly, yearly)", value))
}
