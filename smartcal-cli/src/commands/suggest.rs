use anyhow::Result;
use owo_colors::OwoColorize;
use smartcal_core::app::App;
use smartcal_core::suggest::suggest;

use crate::dates::parse_date_or_today;
use crate::utils::tui::create_spinner;

pub async fn run(app: &mut App, date: Option<&str>, accept: bool) -> Result<()> {
    let date = parse_date_or_today(date)?;

    let spinner = create_spinner("Analyzing your schedule...".to_string());
    let draft = suggest(&app.toaster, date).await;
    spinner.finish_and_clear();
    let draft = draft?;

    println!(
        "{} {} at {} {}",
        "Suggested:".bold(),
        draft.title,
        draft.start_time,
        format!("({}, {}m, {} priority)", draft.date.format("%a %b %-d"), draft.duration, draft.priority).dimmed()
    );

    if accept {
        let id = app.create_event(draft)?;
        println!("{}", format!("  Created: {}", id).green());
    } else {
        println!(
            "{}",
            format!(
                "  Run with --accept to add it, or: smartcal new \"Deep Work Session\" --date {} --time 14:00 --priority high",
                date
            )
            .dimmed()
        );
    }

    Ok(())
}
