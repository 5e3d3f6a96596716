use anyhow::Result;
use cadence_core::error::CoreError;
use cadence_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::EditCommand;
use crate::parser::{parse_date_arg, parse_time_arg};
use crate::util::resolve_event_id;

pub async fn edit_event(repo: &impl Repository, command: EditCommand) -> Result<()> {
    let id = resolve_event_id(repo, &command.id).await?;
    // Every argument is parsed before the store is touched.
    let target_date = command.date.as_deref().map(parse_date_arg).transpose()?;
    let start_time = command.start.as_deref().map(parse_time_arg).transpose()?;
    let end_time = command.end.as_deref().map(parse_time_arg).transpose()?;

    let event = repo
        .find_event_by_id(id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Event with id {} not found", id)))?;

    let was_recurring = event.draft.is_recurring() || event.draft.series_id.is_some();
    let mut draft = if was_recurring {
        repo.update_repeat_occurrence(id, target_date).await?.draft
    } else {
        let mut draft = event.draft;
        if let Some(date) = target_date {
            draft.date = date;
        }
        draft
    };

    if let Some(title) = command.title {
        draft.title = title;
    }
    if let Some(start) = start_time {
        draft.start_time = start;
    }
    if let Some(end) = end_time {
        draft.end_time = end;
    }
    if let Some(description) = command.description {
        draft.description = description;
    }
    if let Some(location) = command.location {
        draft.location = location;
    }
    if let Some(category) = command.category {
        draft.category = category;
    }
    if let Some(notify) = command.notify {
        draft.notification_time = notify;
    }

    let updated = repo.update_event(id, draft).await?;

    let success_style = Style::new().green().bold();
    if was_recurring {
        println!(
            "{} Detached occurrence '{}' on {} from its series",
            "✓".style(success_style),
            updated.draft.title.bold(),
            updated.draft.date
        );
    } else {
        println!(
            "{} Updated event '{}' on {}",
            "✓".style(success_style),
            updated.draft.title.bold(),
            updated.draft.date
        );
    }
    Ok(())
}
