//! Sample events shown before anything has been saved.

use chrono::{Days, NaiveDate};

use crate::error::SmartCalResult;
use crate::event::{CalendarEvent, EventKind, Priority, StartTime};

/// The four demo events, placed around `today`.
pub fn demo_events(today: NaiveDate) -> SmartCalResult<Vec<CalendarEvent>> {
    Ok(vec![
        sample("1", "Product Strategy", today, "10:00", 60, Priority::High, EventKind::Meeting)?,
        sample(
            "2",
            "Deep Work: Coding",
            today + Days::new(1),
            "13:00",
            120,
            Priority::Medium,
            EventKind::Work,
        )?,
        sample("3", "Team Sync", today - Days::new(2), "09:30", 30, Priority::Low, EventKind::Meeting)?,
        sample(
            "4",
            "Lunch with Client",
            today + Days::new(3),
            "12:00",
            90,
            Priority::High,
            EventKind::Personal,
        )?,
    ])
}

fn sample(
    id: &str,
    title: &str,
    date: NaiveDate,
    start: &str,
    duration: u32,
    priority: Priority,
    kind: EventKind,
) -> SmartCalResult<CalendarEvent> {
    Ok(CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        date,
        start_time: start.parse::<StartTime>()?,
        duration,
        priority,
        kind,
    })
}
