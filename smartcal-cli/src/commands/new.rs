use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use smartcal_core::app::App;
use smartcal_core::{EventDraft, EventKind, Priority, StartTime};

use crate::dates::{parse_date_or_today, parse_duration_minutes, parse_time};

pub struct NewEventArgs {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub priority: Option<Priority>,
    pub kind: Option<EventKind>,
}

pub fn run(app: &mut App, args: NewEventArgs) -> Result<()> {
    let interactive = args.title.is_none();
    let mut draft = EventDraft::new(parse_date_or_today(args.date.as_deref())?);

    // --- Title ---
    draft.title = match args.title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Event title")
            .interact_text()?,
    };

    // --- Start time ---
    if let Some(time) = args.time {
        draft.start_time = parse_time(&time)?;
    } else if interactive {
        draft.start_time = prompt_time(&draft.start_time)?;
    }

    // --- Duration ---
    if let Some(duration) = args.duration {
        draft.duration = parse_duration_minutes(&duration)?;
    }

    // --- Priority ---
    if let Some(priority) = args.priority {
        draft.priority = priority;
    } else if interactive {
        draft.priority = prompt_priority(draft.priority)?;
    }

    if let Some(kind) = args.kind {
        draft.kind = kind;
    }

    let summary = format!(
        "{} on {} at {}",
        draft.title.trim(),
        draft.date.format("%b %-d, %Y"),
        draft.start_time
    );
    let id = app.create_event(draft)?;

    if interactive {
        println!();
    }
    println!("{} {}", format!("  Created: {}", summary).green(), id.dimmed());

    Ok(())
}

/// Prompt for a start time, retrying on parse errors.
fn prompt_time(default: &StartTime) -> Result<StartTime> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Start time")
            .default(default.to_string())
            .interact_text()?;
        match parse_time(&input) {
            Ok(time) => return Ok(time),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_priority(default: Priority) -> Result<Priority> {
    let options = [Priority::Low, Priority::Medium, Priority::High];
    let labels = ["Low Priority", "Medium Priority", "High Priority"];
    let default_index = options.iter().position(|p| *p == default).unwrap_or(1);

    let selection = Select::new()
        .with_prompt("  Priority")
        .items(&labels)
        .default(default_index)
        .interact()?;

    Ok(options[selection])
}
