use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl std::fmt::Display for RepeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepeatType::None => write!(f, "none"),
            RepeatType::Daily => write!(f, "daily"),
            RepeatType::Weekly => write!(f, "weekly"),
            RepeatType::Monthly => write!(f, "monthly"),
            RepeatType::Yearly => write!(f, "yearly"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid repeat type: {0}")]
pub struct ParseRepeatTypeError(String);

impl FromStr for RepeatType {
    type Err = ParseRepeatTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(RepeatType::None),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            _ => Err(ParseRepeatTypeError(s.to_string())),
        }
    }
}

/// How an event repeats: every `interval` units of `kind`, up to `end_date`.
///
/// A `None` rule never expands, so its `interval` is not checked. Stored
/// one-off events commonly carry `interval: 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    pub interval: u32,
    /// Inclusive last date of the series. Falls back to the configured horizon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RepeatRule {
    /// The rule carried by a standalone, non-recurring event.
    pub fn none() -> Self {
        Self {
            kind: RepeatType::None,
            interval: 1,
            end_date: None,
        }
    }

    pub fn new(kind: RepeatType, interval: u32, end_date: Option<NaiveDate>) -> Self {
        Self {
            kind,
            interval,
            end_date,
        }
    }

    #[inline]
    pub fn is_recurring(&self) -> bool {
        self.kind != RepeatType::None
    }
}

impl Default for RepeatRule {
    fn default() -> Self {
        Self::none()
    }
}

/// An event as filled in by the user, before it has been stored.
///
/// Expanding a recurring draft yields one `EventDraft` per occurrence that
/// differ only in `date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    /// Local wall-clock start, `HH:MM`
    pub start_time: String,
    /// Local wall-clock end, `HH:MM`
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub repeat: RepeatRule,
    /// Minutes before start at which to notify
    #[serde(default)]
    pub notification_time: u32,
    /// Recurrence group shared by every stored instance of one series.
    /// Standalone events: series_id = None
    /// Series instances: series_id = Some(group), assigned when the series is saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
}

impl EventDraft {
    #[inline]
    pub fn is_recurring(&self) -> bool {
        self.repeat.is_recurring()
    }

    /// Returns a copy of this draft moved to `date`.
    pub fn on(&self, date: NaiveDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }
}

/// A stored event: an identifier plus the draft it was created from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    #[serde(flatten)]
    pub draft: EventDraft,
}

impl Event {
    /// Random (v4) ids keep short id prefixes distinct for instances
    /// created in the same instant.
    pub fn new(draft: EventDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            draft,
        }
    }
}

/// On-disk layout of the event store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<Event>,
}
