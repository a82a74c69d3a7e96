//! Calendar event types.
//!
//! Events are date-only for grid placement. The start time is a plain
//! wall-clock `HH:mm` label used for ordering within a day and for display;
//! it is never combined with the date into an instant.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SmartCalError, SmartCalResult};

/// Duration given to events created without an explicit one.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: StartTime,
    /// Length in minutes, always positive
    pub duration: u32,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

impl CalendarEvent {
    /// Create an event with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: StartTime,
        duration: u32,
        priority: Priority,
        kind: EventKind,
    ) -> Self {
        CalendarEvent {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            date,
            start_time,
            duration,
            priority,
            kind,
        }
    }

    /// Check the field-level rules an event must satisfy before it enters a store.
    pub fn validate(&self) -> SmartCalResult<()> {
        if self.id.trim().is_empty() {
            return Err(SmartCalError::Validation("event id must not be empty".into()));
        }
        if self.title.trim().is_empty() {
            return Err(SmartCalError::Validation("event title must not be empty".into()));
        }
        if self.duration == 0 {
            return Err(SmartCalError::Validation(format!(
                "duration of '{}' must be at least one minute",
                self.title
            )));
        }
        Ok(())
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// A zero-padded 24-hour `HH:mm` wall-clock time.
///
/// Ordering is plain string ordering, which matches chronological order for
/// this format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StartTime(String);

impl StartTime {
    pub fn from_hm(hour: u32, minute: u32) -> SmartCalResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(SmartCalError::Validation(format!(
                "{hour}:{minute} is not a valid time of day"
            )));
        }
        Ok(StartTime(format!("{hour:02}:{minute:02}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StartTime {
    fn default() -> Self {
        StartTime("09:00".to_string())
    }
}

impl FromStr for StartTime {
    type Err = SmartCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SmartCalError::Validation(format!("Invalid time '{s}'. Expected HH:mm"));

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        StartTime::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for StartTime {
    type Error = SmartCalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StartTime> for String {
    fn from(value: StartTime) -> Self {
        value.0
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = SmartCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(SmartCalError::Validation(format!(
                "Unknown priority '{s}'. Expected low, medium or high"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meeting,
    #[default]
    Work,
    Personal,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Meeting => write!(f, "meeting"),
            EventKind::Work => write!(f, "work"),
            EventKind::Personal => write!(f, "personal"),
        }
    }
}

impl FromStr for EventKind {
    type Err = SmartCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "meeting" => Ok(EventKind::Meeting),
            "work" => Ok(EventKind::Work),
            "personal" => Ok(EventKind::Personal),
            _ => Err(SmartCalError::Validation(format!(
                "Unknown event type '{s}'. Expected meeting, work or personal"
            ))),
        }
    }
}

/// Form state for a new event, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: StartTime,
    pub duration: u32,
    pub priority: Priority,
    pub kind: EventKind,
}

impl EventDraft {
    /// Empty draft for `date` with the form's defaults.
    pub fn new(date: NaiveDate) -> Self {
        EventDraft {
            title: String::new(),
            date,
            start_time: StartTime::default(),
            duration: DEFAULT_DURATION_MINUTES,
            priority: Priority::default(),
            kind: EventKind::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Validate the draft and turn it into an event with a new id.
    pub fn into_event(self) -> SmartCalResult<CalendarEvent> {
        let event = CalendarEvent::new(
            self.title.trim(),
            self.date,
            self.start_time,
            self.duration,
            self.priority,
            self.kind,
        );
        event.validate()?;
        Ok(event)
    }
}
