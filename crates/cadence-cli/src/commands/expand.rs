use anyhow::Result;
use cadence_core::occurrence::delete_repeat_event;
use cadence_core::recurrence::{generate_repeat_events, RecurrenceConfig};

use crate::cli::ExpandCommand;
use crate::commands::add::draft_from_args;
use crate::parser::parse_date_arg;
use crate::views::table::display_drafts;

/// Prints the instances a draft would expand into. Nothing is stored.
pub fn expand_event(command: ExpandCommand, config: &RecurrenceConfig) -> Result<()> {
    let seed = draft_from_args(command.draft)?;
    let instances = match command.without.as_deref() {
        Some(date) => delete_repeat_event(&seed, parse_date_arg(date)?, config)?,
        None => generate_repeat_events(&seed, config)?,
    };

    if command.json {
        println!("{}", serde_json::to_string_pretty(&instances)?);
    } else {
        display_drafts(&instances);
        println!("{} occurrence(s)", instances.len());
    }
    Ok(())
}
