//! Day agenda ("focus mode") projection.

use chrono::NaiveDate;

use crate::event::CalendarEvent;

/// Events on `date`, ordered by start time. Events sharing a start time keep
/// their relative order from `events`.
pub fn day_agenda(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    let mut agenda = events_on(events, date);
    agenda.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    agenda
}

/// Events on `date` in list order, as shown inside a month grid cell.
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.date == date).collect()
}
