use anyhow::Result;
use smartcal_core::app::App;

use crate::dates::{parse_date, today};

pub fn run(app: &mut App, id: &str, date: &str) -> Result<()> {
    let date = parse_date(date, today())?;
    app.reschedule(id, date)?;
    Ok(())
}
