use anyhow::Result;
use cadence_core::models::{EventDraft, RepeatRule};
use cadence_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::{AddCommand, DraftArgs};
use crate::parser::{parse_date_arg, parse_time_arg};

/// Builds the draft described by the shared event flags.
pub fn draft_from_args(args: DraftArgs) -> Result<EventDraft> {
    let date = parse_date_arg(&args.date)?;
    let end_date = args.until.as_deref().map(parse_date_arg).transpose()?;
    Ok(EventDraft {
        title: args.title,
        date,
        start_time: parse_time_arg(&args.start)?,
        end_time: parse_time_arg(&args.end)?,
        description: args.description,
        location: args.location,
        category: args.category,
        repeat: RepeatRule::new(args.repeat, args.interval, end_date),
        notification_time: args.notify,
        series_id: None,
    })
}

pub async fn add_event(repo: &impl Repository, command: AddCommand) -> Result<()> {
    let draft = draft_from_args(command.draft)?;
    let title = draft.title.clone();
    let saved = repo.save_repeat_events(draft).await?;

    let success_style = Style::new().green().bold();
    let Some(first) = saved.first() else {
        println!("{} No occurrences fall within the series range.", "Note:".yellow().bold());
        return Ok(());
    };

    let short_id = first.id.to_string()[..8].to_string();
    if first.draft.series_id.is_some() {
        let last = &saved[saved.len() - 1];
        println!(
            "{} Added recurring event '{}': {} occurrences from {} to {}",
            "✓".style(success_style),
            title.bold(),
            saved.len(),
            first.draft.date,
            last.draft.date
        );
    } else {
        println!(
            "{} Added event '{}' on {} ({})",
            "✓".style(success_style),
            title.bold(),
            first.draft.date,
            short_id.dimmed()
        );
    }
    Ok(())
}
