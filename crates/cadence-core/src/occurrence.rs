//! Single-occurrence edits on a recurring series.
//!
//! Neither function touches storage. The caller persists what they return:
//! the detached draft replaces one stored instance, the remaining drafts
//! replace the whole stored series.

use chrono::NaiveDate;
use tracing::debug;

use crate::dates::format_date;
use crate::error::CoreError;
use crate::models::{EventDraft, RepeatRule};
use crate::recurrence::{generate_repeat_events, RecurrenceConfig};

/// Detaches the occurrence on `target_date` into a standalone event.
///
/// The copy keeps every field of `original` except `date`, which becomes
/// `target_date`, `repeat`, which becomes [`RepeatRule::none`], and
/// `series_id`, which is cleared since the event no longer belongs to a group.
pub fn modify_repeat_event(original: &EventDraft, target_date: NaiveDate) -> EventDraft {
    EventDraft {
        date: target_date,
        repeat: RepeatRule::none(),
        series_id: None,
        ..original.clone()
    }
}

/// Removes the occurrence on `target_date` from the series seeded by `original`.
///
/// A non-recurring event comes back unchanged as a single-element list.
/// Otherwise the full series is regenerated and every instance except the
/// one dated `target_date` is returned, still carrying `original.repeat`.
pub fn delete_repeat_event(
    original: &EventDraft,
    target_date: NaiveDate,
    config: &RecurrenceConfig,
) -> Result<Vec<EventDraft>, CoreError> {
    if !original.is_recurring() {
        return Ok(vec![original.clone()]);
    }

    let mut remaining = generate_repeat_events(original, config)?;
    let before = remaining.len();
    remaining.retain(|event| event.date != target_date);

    debug!(
        target = %format_date(target_date),
        removed = before - remaining.len(),
        remaining = remaining.len(),
        "removed occurrence from series"
    );

    Ok(remaining)
}
