use crate::error::CoreError;
use crate::models::{Event, EventDraft, EventList};
use crate::recurrence::RecurrenceEngine;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

// Re-export domain modules
pub mod events;
pub mod series;

/// Domain-specific trait for plain event operations
#[async_trait]
pub trait EventRepository {
    async fn list_events(&self) -> Result<Vec<Event>, CoreError>;
    async fn find_event_by_id(&self, id: Uuid) -> Result<Option<Event>, CoreError>;
    async fn find_events_by_short_id_prefix(&self, short_id: &str) -> Result<Vec<Event>, CoreError>;
    async fn add_event(&self, draft: EventDraft) -> Result<Event, CoreError>;
    async fn add_events(&self, drafts: Vec<EventDraft>) -> Result<Vec<Event>, CoreError>;
    async fn update_event(&self, id: Uuid, draft: EventDraft) -> Result<Event, CoreError>;
    async fn update_events(&self, events: Vec<Event>) -> Result<Vec<Event>, CoreError>;
    async fn delete_event(&self, id: Uuid) -> Result<(), CoreError>;
    async fn delete_events(&self, ids: &[Uuid]) -> Result<usize, CoreError>;
}

/// Domain-specific trait for recurring series operations
#[async_trait]
pub trait SeriesRepository {
    /// All stored instances of one recurrence group, ordered by date.
    async fn find_series(&self, series_id: Uuid) -> Result<Vec<Event>, CoreError>;
    /// Expands `seed` and stores every instance under a fresh series id.
    async fn save_repeat_events(&self, seed: EventDraft) -> Result<Vec<Event>, CoreError>;
    /// Detaches one stored occurrence into a standalone event, optionally moving it.
    async fn update_repeat_occurrence(&self, id: Uuid, target_date: Option<NaiveDate>) -> Result<Event, CoreError>;
    /// Deletes one stored occurrence and returns what is left of its series.
    async fn delete_repeat_occurrence(&self, id: Uuid) -> Result<Vec<Event>, CoreError>;
    async fn delete_series(&self, series_id: Uuid) -> Result<usize, CoreError>;
}

/// Main repository trait that composes all domain traits
#[async_trait]
pub trait Repository: EventRepository + SeriesRepository {}

impl<T: EventRepository + SeriesRepository> Repository for T {}

/// In-memory event store, optionally mirrored to a JSON file.
///
/// Every mutation rewrites the backing file while the write lock is held,
/// so the file always matches the last completed operation.
pub struct JsonRepository {
    events: RwLock<Vec<Event>>,
    path: Option<PathBuf>,
    engine: RecurrenceEngine,
}

impl JsonRepository {
    /// Creates an empty store that never touches the filesystem.
    pub fn in_memory(engine: RecurrenceEngine) -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            path: None,
            engine,
        }
    }

    /// Opens the store at `path`. A missing file is an empty store.
    pub async fn open(path: impl AsRef<Path>, engine: RecurrenceEngine) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let events = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str::<EventList>(&contents)?.events,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), count = events.len(), "opened event store");

        Ok(Self {
            events: RwLock::new(events),
            path: Some(path),
            engine,
        })
    }

    /// Get a reference to the recurrence engine for internal use across modules
    pub(crate) fn engine(&self) -> &RecurrenceEngine {
        &self.engine
    }

    pub(crate) fn events(&self) -> &RwLock<Vec<Event>> {
        &self.events
    }

    /// Replaces `events` with `next` once `next` has been written out.
    /// On a failed write the in-memory list is left as it was.
    pub(crate) async fn commit(&self, events: &mut Vec<Event>, next: Vec<Event>) -> Result<(), CoreError> {
        self.persist(&next).await?;
        *events = next;
        Ok(())
    }

    /// Writes `events` to the backing file, if there is one.
    async fn persist(&self, events: &[Event]) -> Result<(), CoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let list = EventList {
            events: events.to_vec(),
        };
        let contents = serde_json::to_string_pretty(&list)?;
        tokio::fs::write(path, contents).await?;
        Ok(())
    }
}

/// Orders events the way a calendar lists them.
pub(crate) fn sort_chronologically(events: &mut [Event]) {
    events.sort_by(|a, b| {
        a.draft
            .date
            .cmp(&b.draft.date)
            .then_with(|| a.draft.start_time.cmp(&b.draft.start_time))
            .then_with(|| a.id.cmp(&b.id))
    });
}
