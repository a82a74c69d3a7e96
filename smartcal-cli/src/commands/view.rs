use anyhow::Result;
use owo_colors::OwoColorize;
use smartcal_core::app::App;
use smartcal_core::store::ViewMode;

use crate::ViewArg;

/// Render whichever view is currently selected.
pub fn show(app: &App, date: Option<&str>) -> Result<()> {
    match app.events.view_mode() {
        ViewMode::Day => super::day::run(app, date),
        ViewMode::Month | ViewMode::Week => super::month::run(app, date, 0),
    }
}

pub fn run(app: &mut App, mode: ViewArg) -> Result<()> {
    let mode = match mode {
        ViewArg::Month => {
            app.events.set_view_mode(ViewMode::Month)?;
            ViewMode::Month
        }
        ViewArg::Day => {
            app.events.set_view_mode(ViewMode::Day)?;
            ViewMode::Day
        }
        ViewArg::Toggle => app.events.toggle_view_mode()?,
    };

    let label = match mode {
        ViewMode::Day => "Switched to Focus Mode",
        ViewMode::Month | ViewMode::Week => "Switched to Month View",
    };
    println!("{}", label.green());

    Ok(())
}
