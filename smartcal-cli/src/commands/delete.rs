use anyhow::Result;
use smartcal_core::app::App;

pub fn run(app: &mut App, id: &str) -> Result<()> {
    app.remove_event(id)?;
    Ok(())
}
