use anyhow::Result;
use cadence_core::repository::Repository;

use crate::cli::ListCommand;
use crate::parser::parse_date_arg;
use crate::views::table::display_events;

pub async fn list_events(repo: &impl Repository, command: ListCommand) -> Result<()> {
    let from = command.from.as_deref().map(parse_date_arg).transpose()?;
    let to = command.to.as_deref().map(parse_date_arg).transpose()?;

    let events: Vec<_> = repo
        .list_events()
        .await?
        .into_iter()
        .filter(|e| from.map_or(true, |d| e.draft.date >= d))
        .filter(|e| to.map_or(true, |d| e.draft.date <= d))
        .collect();

    display_events(&events);
    Ok(())
}
