use cadence_core::dates::format_date;
use cadence_core::models::{Event, EventDraft, RepeatType};
use comfy_table::{Attribute, Cell, Color, Row, Table};

/// Renders stored events; recurring instances carry a `↻` before the title.
pub fn display_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Time", "Title", "Category", "Repeat"]);

    for event in events {
        let mut row = Row::new();
        row.add_cell(Cell::new(&event.id.to_string()[..8]));
        add_draft_cells(&mut row, &event.draft);
        table.add_row(row);
    }

    println!("{table}");
}

/// Renders unsaved instances, numbered from 1.
pub fn display_drafts(drafts: &[EventDraft]) {
    if drafts.is_empty() {
        println!("No occurrences.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Time", "Title", "Category", "Repeat"]);

    for (index, draft) in drafts.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(index + 1));
        add_draft_cells(&mut row, draft);
        table.add_row(row);
    }

    println!("{table}");
}

fn add_draft_cells(row: &mut Row, draft: &EventDraft) {
    row.add_cell(Cell::new(format_date(draft.date)));
    row.add_cell(Cell::new(format!("{}-{}", draft.start_time, draft.end_time)));

    let title = if draft.is_recurring() {
        format!("↻ {}", draft.title)
    } else {
        draft.title.clone()
    };
    let mut title_cell = Cell::new(title);
    if draft.series_id.is_some() {
        title_cell = title_cell.fg(Color::Cyan);
    } else {
        title_cell = title_cell.add_attribute(Attribute::Bold);
    }
    row.add_cell(title_cell);

    row.add_cell(Cell::new(&draft.category).fg(Color::Blue));
    row.add_cell(Cell::new(repeat_label(draft)));
}

fn repeat_label(draft: &EventDraft) -> String {
    let rule = &draft.repeat;
    let unit = match rule.kind {
        RepeatType::None => return String::new(),
        RepeatType::Daily => "day",
        RepeatType::Weekly => "week",
        RepeatType::Monthly => "month",
        RepeatType::Yearly => "year",
    };
    let every = if rule.interval == 1 {
        format!("every {unit}")
    } else {
        format!("every {} {unit}s", rule.interval)
    };
    match rule.end_date {
        Some(end) => format!("{every} until {}", format_date(end)),
        None => every,
    }
}
