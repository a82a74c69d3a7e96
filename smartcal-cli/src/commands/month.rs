use anyhow::Result;
use smartcal_core::app::App;
use smartcal_core::grid::{MonthGrid, shift_month};

use crate::dates::{parse_date_or_today, today};
use crate::render::render_month;

pub fn run(app: &App, date: Option<&str>, shift: i32) -> Result<()> {
    let reference = shift_month(parse_date_or_today(date)?, shift);
    let grid = MonthGrid::new(reference);

    println!("{}", render_month(&grid, app.events.list_events(), today()));

    Ok(())
}
