use anyhow::Result;
use cadence_core::models::Event;
use cadence_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

pub async fn delete_event(repo: &impl Repository, event: Event, series: bool) -> Result<()> {
    let success_style = Style::new().green().bold();

    if series {
        if let Some(series_id) = event.draft.series_id {
            let removed = repo.delete_series(series_id).await?;
            println!(
                "{} Deleted {} occurrence(s) of '{}'",
                "✓".style(success_style),
                removed,
                event.draft.title.bold()
            );
            return Ok(());
        }
    }

    if event.draft.is_recurring() || event.draft.series_id.is_some() {
        let remaining = repo.delete_repeat_occurrence(event.id).await?;
        println!(
            "{} Deleted the {} occurrence of '{}' ({} left in the series)",
            "✓".style(success_style),
            event.draft.date,
            event.draft.title.bold(),
            remaining.len()
        );
    } else {
        repo.delete_event(event.id).await?;
        println!(
            "{} Deleted event '{}'",
            "✓".style(success_style),
            event.draft.title.bold()
        );
    }
    Ok(())
}
