use anyhow::{anyhow, Result};
use cadence_core::error::CoreError;
use cadence_core::repository::Repository;
use uuid::Uuid;

pub async fn resolve_event_id(repo: &impl Repository, short_id: &str) -> Result<Uuid> {
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::InvalidInput(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    let events = repo.find_events_by_short_id_prefix(short_id).await?;
    match events.len() {
        1 => Ok(events[0].id),
        0 => Err(anyhow!(CoreError::NotFound(format!(
            "No event found with ID prefix '{}'",
            short_id
        )))),
        _ => {
            let event_info: Vec<(String, String)> = events
                .into_iter()
                .map(|e| (e.id.to_string(), format!("{} on {}", e.draft.title, e.draft.date)))
                .collect();
            Err(anyhow!(CoreError::AmbiguousId(event_info)))
        }
    }
}
