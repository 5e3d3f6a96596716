//! # Cadence Core Library
//!
//! The recurring-event engine behind the Cadence calendar: expanding one
//! repeat rule into dated event instances, and editing or deleting a single
//! occurrence without disturbing the rest of its series.
//!
//! ## Core Modules
//!
//! - [`dates`]: Calendar arithmetic (ISO formatting, leap years, month lengths)
//! - [`models`]: Event drafts, stored events and repeat rules
//! - [`recurrence`]: Series expansion and its configuration
//! - [`occurrence`]: Detaching or deleting one occurrence of a series
//! - [`repository`]: Event storage and series orchestration
//! - [`error`]: Error types
//!
//! `dates`, `recurrence` and `occurrence` are pure and perform no I/O.
//!
//! ## Example Usage
//!
//! ```rust
//! use cadence_core::models::{EventDraft, RepeatRule, RepeatType};
//! use cadence_core::recurrence::{generate_repeat_events, RecurrenceConfig};
//! use chrono::NaiveDate;
//!
//! let seed = EventDraft {
//!     title: "Rent".to_string(),
//!     date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
//!     repeat: RepeatRule::new(
//!         RepeatType::Monthly,
//!         1,
//!         NaiveDate::from_ymd_opt(2025, 5, 31),
//!     ),
//!     ..Default::default()
//! };
//!
//! let series = generate_repeat_events(&seed, &RecurrenceConfig::default()).unwrap();
//! // February and April have no 31st and are skipped.
//! assert_eq!(series.len(), 3);
//! ```

pub mod dates;
pub mod error;
pub mod models;
pub mod occurrence;
pub mod recurrence;
pub mod repository;
