//! Parsing of user-entered dates, times and durations.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use smartcal_core::StartTime;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse an optional date argument, defaulting to today.
pub fn parse_date_or_today(input: Option<&str>) -> Result<NaiveDate> {
    match input {
        Some(s) => parse_date(s, today()),
        None => Ok(today()),
    }
}

/// Parse `YYYY-MM-DD`, `today`/`tomorrow`/`yesterday`, or a natural language
/// date such as "next friday" or "march 20".
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    match trimmed.to_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(today + Days::new(1)),
        "yesterday" => return Ok(today - Days::new(1)),
        _ => {}
    }

    let expanded = expand_abbreviations(trimmed);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Expand day and month abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn parse_time(input: &str) -> Result<StartTime> {
    Ok(input.trim().parse::<StartTime>()?)
}

/// Parse a duration as plain minutes ("45") or a humantime string ("1h30m").
pub fn parse_duration_minutes(input: &str) -> Result<u32> {
    let trimmed = input.trim();

    if let Ok(minutes) = trimmed.parse::<u32>() {
        return Ok(minutes);
    }

    let duration = humantime::parse_duration(trimmed)
        .with_context(|| format!("Could not parse duration: \"{}\"", input))?;

    if duration.subsec_nanos() != 0 || duration.as_secs() % 60 != 0 {
        anyhow::bail!("Duration must be a whole number of minutes: \"{}\"", input);
    }

    u32::try_from(duration.as_secs() / 60).context("Duration too large")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_dates_parse_exactly() {
        assert_eq!(parse_date("2024-05-12", date(2030, 1, 1)).unwrap(), date(2024, 5, 12));
    }

    #[test]
    fn relative_keywords_use_given_today() {
        let today = date(2024, 2, 28);
        assert_eq!(parse_date("today", today).unwrap(), today);
        assert_eq!(parse_date("Tomorrow", today).unwrap(), date(2024, 2, 29));
        assert_eq!(parse_date("yesterday", today).unwrap(), date(2024, 2, 27));
    }

    #[test]
    fn natural_language_absolute_date() {
        let parsed = parse_date("mar 20", today()).unwrap();
        assert_eq!(parsed.month(), 3);
        assert_eq!(parsed.day(), 20);
    }

    #[test]
    fn garbage_date_is_an_error() {
        assert!(parse_date("not a date at all xyz", today()).is_err());
    }

    #[test]
    fn expand_day_and_month_abbreviations() {
        assert_eq!(expand_abbreviations("sat"), "saturday");
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
        assert_eq!(expand_abbreviations("Jan 20"), "january 20");
    }

    #[test]
    fn times_must_be_padded_hh_mm() {
        assert_eq!(parse_time("14:00").unwrap().as_str(), "14:00");
        assert!(parse_time("2pm").is_err());
    }

    #[test]
    fn durations_accept_minutes_and_humantime() {
        assert_eq!(parse_duration_minutes("45").unwrap(), 45);
        assert_eq!(parse_duration_minutes("1h30m").unwrap(), 90);
        assert_eq!(parse_duration_minutes("2hours").unwrap(), 120);
        assert!(parse_duration_minutes("soon").is_err());
    }

    #[test]
    fn durations_with_leftover_seconds_are_rejected() {
        let err = parse_duration_minutes("90s").unwrap_err();
        assert!(err.to_string().contains("whole number of minutes"));
        assert!(parse_duration_minutes("30s").is_err());
        assert_eq!(parse_duration_minutes("120s").unwrap(), 2);
    }
}
