use anyhow::Result;
use owo_colors::OwoColorize;
use smartcal_core::app::App;

use crate::ThemeArg;

pub fn run(app: &mut App, action: Option<ThemeArg>) -> Result<()> {
    match action {
        None => {}
        Some(ThemeArg::Toggle) => {
            app.theme.toggle_theme()?;
        }
        Some(ThemeArg::Dark) => app.theme.set_dark(true)?,
        Some(ThemeArg::Light) => app.theme.set_dark(false)?,
    }

    let name = if app.theme.is_dark() { "dark" } else { "light" };
    println!("Theme: {}", name.bold());

    Ok(())
}
