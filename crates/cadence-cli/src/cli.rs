use cadence_core::models::RepeatType;
use clap::{Args, Parser, Subcommand};

use crate::parser::parse_repeat_type;

/// A calendar for the command line with recurring events
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add an event, expanding it into a series if it repeats
    Add(AddCommand),
    /// Preview the dates of a recurring event without saving it
    Expand(ExpandCommand),
    /// List stored events
    List(ListCommand),
    /// Edit an event; a recurring occurrence is detached from its series
    Edit(EditCommand),
    /// Delete an event; for a recurring event only that occurrence goes
    Delete(DeleteCommand),
}

/// Fields of the event form shared by `add` and `expand`
#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    /// The title of the event
    pub title: String,
    /// The date of the (first) occurrence
    #[clap(short, long)]
    pub date: String,
    /// Start time (HH:MM)
    #[clap(long, default_value = "09:00")]
    pub start: String,
    /// End time (HH:MM)
    #[clap(long, default_value = "10:00")]
    pub end: String,
    #[clap(long, default_value = "")]
    pub description: String,
    #[clap(long, default_value = "")]
    pub location: String,
    #[clap(long, default_value = "")]
    pub category: String,
    /// Minutes before start to notify
    #[clap(long, default_value_t = 10)]
    pub notify: u32,
    /// How the event repeats (none, daily, weekly, monthly, yearly)
    #[clap(short, long, value_parser = parse_repeat_type, default_value = "none")]
    pub repeat: RepeatType,
    /// Repeat every N days/weeks/months/years
    #[clap(short, long, default_value_t = 1)]
    pub interval: u32,
    /// Last date of the series (inclusive)
    #[clap(short, long, help = "End date for recurrence (e.g., '2025-12-31')")]
    pub until: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    #[command(flatten)]
    pub draft: DraftArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ExpandCommand {
    #[command(flatten)]
    pub draft: DraftArgs,
    /// Leave out the occurrence on this date
    #[clap(long)]
    pub without: Option<String>,
    /// Print the instances as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Only show events on or after this date
    #[clap(long)]
    pub from: Option<String>,
    /// Only show events on or before this date
    #[clap(long)]
    pub to: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID (or ID prefix) of the event to edit
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,
    /// Move the event (or detached occurrence) to this date
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub notify: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID (or ID prefix) of the event to delete
    pub id: String,
    /// Delete every occurrence of the event's series
    #[clap(long)]
    pub series: bool,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}
