use anyhow::Result;
use smartcal_core::agenda::day_agenda;
use smartcal_core::app::App;

use crate::dates::{parse_date_or_today, today};
use crate::render::render_agenda;

pub fn run(app: &App, date: Option<&str>) -> Result<()> {
    let date = parse_date_or_today(date)?;
    let agenda = day_agenda(app.events.list_events(), date);

    println!("{}", render_agenda(date, &agenda, today()));

    Ok(())
}
