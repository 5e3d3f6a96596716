use crate::error::CoreError;
use crate::models::{Event, EventDraft};
use crate::occurrence::modify_repeat_event;
use crate::repository::{sort_chronologically, JsonRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

#[async_trait]
impl super::SeriesRepository for JsonRepository {
    async fn find_series(&self, series_id: Uuid) -> Result<Vec<Event>, CoreError> {
        let mut series: Vec<Event> = self
            .events()
            .read()
            .await
            .iter()
            .filter(|e| e.draft.series_id == Some(series_id))
            .cloned()
            .collect();
        sort_chronologically(&mut series);
        Ok(series)
    }

    async fn save_repeat_events(&self, mut seed: EventDraft) -> Result<Vec<Event>, CoreError> {
        // Expand before taking the lock so an invalid rule leaves the store untouched.
        seed.series_id = seed.is_recurring().then(Uuid::now_v7);
        let instances = self.engine().generate(&seed)?;

        let created: Vec<Event> = instances.into_iter().map(Event::new).collect();
        let mut events = self.events().write().await;
        let mut next = events.clone();
        next.extend(created.iter().cloned());
        self.commit(&mut events, next).await?;

        info!(
            series_id = ?seed.series_id,
            kind = %seed.repeat.kind,
            count = created.len(),
            "saved recurring series"
        );
        Ok(created)
    }

    async fn update_repeat_occurrence(
        &self,
        id: Uuid,
        target_date: Option<NaiveDate>,
    ) -> Result<Event, CoreError> {
        let mut events = self.events().write().await;
        let mut next = events.clone();
        let slot = next
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("Event with id {} not found", id)))?;

        let previous_series = slot.draft.series_id;
        let date = target_date.unwrap_or(slot.draft.date);
        slot.draft = modify_repeat_event(&slot.draft, date);
        let detached = slot.clone();
        self.commit(&mut events, next).await?;

        info!(id = %id, series_id = ?previous_series, date = %date, "detached occurrence from series");
        Ok(detached)
    }

    async fn delete_repeat_occurrence(&self, id: Uuid) -> Result<Vec<Event>, CoreError> {
        let mut events = self.events().write().await;
        let target = events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("Event with id {} not found", id)))?;

        let mut next = events.clone();
        next.retain(|e| e.id != id);
        self.commit(&mut events, next).await?;

        // Siblings are found by group id; the stored rule is never re-expanded.
        let mut remaining: Vec<Event> = match target.draft.series_id {
            Some(series_id) => events
                .iter()
                .filter(|e| e.draft.series_id == Some(series_id))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        sort_chronologically(&mut remaining);

        info!(
            id = %id,
            series_id = ?target.draft.series_id,
            remaining = remaining.len(),
            "deleted occurrence"
        );
        Ok(remaining)
    }

    async fn delete_series(&self, series_id: Uuid) -> Result<usize, CoreError> {
        let mut events = self.events().write().await;
        let mut next = events.clone();
        next.retain(|e| e.draft.series_id != Some(series_id));
        let removed = events.len() - next.len();
        if removed == 0 {
            return Err(CoreError::NotFound(format!("Series with id {} not found", series_id)));
        }
        self.commit(&mut events, next).await?;

        info!(series_id = %series_id, count = removed, "deleted series");
        Ok(removed)
    }
}
