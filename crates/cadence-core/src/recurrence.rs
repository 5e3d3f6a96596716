use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, trace};

use crate::dates::{days_in_month, format_date, is_leap_year};
use crate::error::CoreError;
use crate::models::{EventDraft, RepeatRule, RepeatType};
use crate::occurrence::delete_repeat_event;

/// Last date of a series whose rule has no `end_date`.
pub const DEFAULT_END_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 10, 30) {
    Some(date) => date,
    None => panic!("default series horizon is not a valid date"),
};

/// Upper bound on the number of instances a single expansion may produce.
pub const DEFAULT_MAX_OCCURRENCES: usize = 10_000;

/// Configuration for series expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceConfig {
    /// Horizon used when a rule carries no end date
    pub default_end_date: NaiveDate,
    /// Hard cap on instances per expansion; exceeding it is an error
    pub max_occurrences: usize,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            default_end_date: DEFAULT_END_DATE,
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

/// Expands `seed` into one draft per occurrence of its repeat rule.
///
/// # Behavior
/// - A non-recurring seed yields exactly itself
/// - Occurrences run from `seed.date` through the rule's end date (or
///   `config.default_end_date`), both inclusive, in increasing order
/// - A step past the last representable date ends the series
/// - Monthly and yearly series stay pinned to the seed's day; months or
///   years that lack that day are skipped, never clamped
/// - Every instance is a copy of `seed` with only `date` replaced
///
/// # Errors
/// - `InvalidInput` if a recurring rule has an interval of zero
/// - `OccurrenceLimitExceeded` if the series would exceed
///   `config.max_occurrences` instances
pub fn generate_repeat_events(
    seed: &EventDraft,
    config: &RecurrenceConfig,
) -> Result<Vec<EventDraft>, CoreError> {
    let rule = &seed.repeat;
    if !rule.is_recurring() {
        return Ok(vec![seed.clone()]);
    }
    validate_rule(rule)?;

    let start = seed.date;
    let end = rule.end_date.unwrap_or(config.default_end_date);

    let mut events = Vec::new();
    let mut cursor = Some(start);

    while let Some(current) = cursor.filter(|date| *date <= end) {
        if events.len() >= config.max_occurrences {
            return Err(CoreError::OccurrenceLimitExceeded {
                limit: config.max_occurrences,
            });
        }
        events.push(seed.on(current));
        cursor = next_occurrence(current, rule, start);
    }

    debug!(
        kind = %rule.kind,
        interval = rule.interval,
        start = %format_date(start),
        end = %format_date(end),
        count = events.len(),
        "expanded recurring event"
    );

    Ok(events)
}

/// Rejects rules that cannot advance.
pub fn validate_rule(rule: &RepeatRule) -> Result<(), CoreError> {
    if rule.is_recurring() && rule.interval == 0 {
        return Err(CoreError::InvalidInput(format!(
            "{} repeat interval must be at least 1",
            rule.kind
        )));
    }
    Ok(())
}

/// Computes the occurrence that follows `current`.
///
/// `anchor` is the first date of the series; its day (and for yearly rules
/// its month) is what monthly and yearly steps land on. Returns `None` for
/// non-recurring rules and when the next date is outside the representable
/// calendar.
pub fn next_occurrence(current: NaiveDate, rule: &RepeatRule, anchor: NaiveDate) -> Option<NaiveDate> {
    let interval = rule.interval;
    match rule.kind {
        RepeatType::None => None,
        RepeatType::Daily => current.checked_add_days(Days::new(u64::from(interval))),
        RepeatType::Weekly => current.checked_add_days(Days::new(7 * u64::from(interval))),
        RepeatType::Monthly => next_monthly(current, interval, anchor.day()),
        RepeatType::Yearly => next_yearly(current, interval, anchor),
    }
}

fn next_monthly(current: NaiveDate, interval: u32, anchor_day: u32) -> Option<NaiveDate> {
    // Month index counted from year 0 so that carries into the year are free.
    let mut months = i64::from(current.year()) * 12 + i64::from(current.month0());

    loop {
        months += i64::from(interval);
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month0 = months.rem_euclid(12) as u32;

        if anchor_day <= days_in_month(year, month0) {
            return NaiveDate::from_ymd_opt(year, month0 + 1, anchor_day);
        }
        trace!(year, month = month0 + 1, anchor_day, "month has no anchor day, skipping");
    }
}

fn next_yearly(current: NaiveDate, interval: u32, anchor: NaiveDate) -> Option<NaiveDate> {
    let step = i32::try_from(interval).ok()?;
    let leap_day = anchor.month() == 2 && anchor.day() == 29;
    let mut year = current.year();

    loop {
        year = year.checked_add(step)?;
        if leap_day && !is_leap_year(year) {
            trace!(year, "year has no February 29, skipping");
            continue;
        }
        return NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day());
    }
}

/// RecurrenceEngine: expansion and occurrence editing bound to one configuration.
///
/// Holds no state besides its configuration, so one engine can be shared
/// freely between callers.
#[derive(Debug, Clone, Default)]
pub struct RecurrenceEngine {
    config: RecurrenceConfig,
}

impl RecurrenceEngine {
    /// Creates a new RecurrenceEngine with the given configuration.
    pub fn new(config: RecurrenceConfig) -> Self {
        Self { config }
    }

    /// Creates a RecurrenceEngine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RecurrenceConfig::default())
    }

    /// Expands `seed` using this engine's configuration.
    pub fn generate(&self, seed: &EventDraft) -> Result<Vec<EventDraft>, CoreError> {
        generate_repeat_events(seed, &self.config)
    }

    /// Expands `original` and drops the occurrence on `target_date`.
    pub fn delete_occurrence(
        &self,
        original: &EventDraft,
        target_date: NaiveDate,
    ) -> Result<Vec<EventDraft>, CoreError> {
        delete_repeat_event(original, target_date, &self.config)
    }

    /// Gets the current configuration.
    pub fn config(&self) -> &RecurrenceConfig {
        &self.config
    }

    /// Updates the configuration for this engine.
    pub fn update_config(&mut self, config: RecurrenceConfig) {
        self.config = config;
    }
}
