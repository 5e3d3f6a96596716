use crate::error::CoreError;
use crate::models::{Event, EventDraft};
use crate::repository::{sort_chronologically, JsonRepository};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

#[async_trait]
impl super::EventRepository for JsonRepository {
    async fn list_events(&self) -> Result<Vec<Event>, CoreError> {
        let mut events = self.events().read().await.clone();
        sort_chronologically(&mut events);
        Ok(events)
    }

    async fn find_event_by_id(&self, id: Uuid) -> Result<Option<Event>, CoreError> {
        let events = self.events().read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn find_events_by_short_id_prefix(&self, short_id: &str) -> Result<Vec<Event>, CoreError> {
        let prefix = short_id.to_lowercase();
        let events = self.events().read().await;
        Ok(events
            .iter()
            .filter(|e| e.id.to_string().starts_with(&prefix))
            .cloned()
            .collect())
    }

    async fn add_event(&self, draft: EventDraft) -> Result<Event, CoreError> {
        let event = Event::new(draft);
        let mut events = self.events().write().await;
        let mut next = events.clone();
        next.push(event.clone());
        self.commit(&mut events, next).await?;

        info!(id = %event.id, title = %event.draft.title, "added event");
        Ok(event)
    }

    async fn add_events(&self, drafts: Vec<EventDraft>) -> Result<Vec<Event>, CoreError> {
        let created: Vec<Event> = drafts.into_iter().map(Event::new).collect();
        let mut events = self.events().write().await;
        let mut next = events.clone();
        next.extend(created.iter().cloned());
        self.commit(&mut events, next).await?;

        info!(count = created.len(), "added events");
        Ok(created)
    }

    async fn update_event(&self, id: Uuid, draft: EventDraft) -> Result<Event, CoreError> {
        let mut events = self.events().write().await;
        let mut next = events.clone();
        let slot = next
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("Event with id {} not found", id)))?;
        slot.draft = draft;
        let updated = slot.clone();
        self.commit(&mut events, next).await?;

        info!(id = %id, "updated event");
        Ok(updated)
    }

    async fn update_events(&self, updates: Vec<Event>) -> Result<Vec<Event>, CoreError> {
        let mut events = self.events().write().await;
        let mut next = events.clone();
        let mut updated = Vec::with_capacity(updates.len());

        for update in updates {
            if let Some(slot) = next.iter_mut().find(|e| e.id == update.id) {
                slot.draft = update.draft;
                updated.push(slot.clone());
            }
        }

        if updated.is_empty() {
            return Err(CoreError::NotFound("None of the given events exist".to_string()));
        }
        self.commit(&mut events, next).await?;

        info!(count = updated.len(), "updated events");
        Ok(updated)
    }

    async fn delete_event(&self, id: Uuid) -> Result<(), CoreError> {
        let mut events = self.events().write().await;
        let mut next = events.clone();
        next.retain(|e| e.id != id);
        if next.len() == events.len() {
            return Err(CoreError::NotFound(format!("Event with id {} not found", id)));
        }
        self.commit(&mut events, next).await?;

        info!(id = %id, "deleted event");
        Ok(())
    }

    async fn delete_events(&self, ids: &[Uuid]) -> Result<usize, CoreError> {
        let mut events = self.events().write().await;
        let mut next = events.clone();
        next.retain(|e| !ids.contains(&e.id));
        let removed = events.len() - next.len();
        self.commit(&mut events, next).await?;

        info!(count = removed, "deleted events");
        Ok(removed)
    }
}
