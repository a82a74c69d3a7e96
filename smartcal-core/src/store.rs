//! The calendar event store.
//!
//! Owns the event list and the current view mode. Every successful mutation
//! writes a snapshot of both to storage before returning.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SmartCalError, SmartCalResult};
use crate::event::CalendarEvent;
use crate::storage::{EVENTS_KEY, Storage, load_record, save_record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    /// Reserved; no week view exists yet.
    Week,
    Day,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Month => write!(f, "month"),
            ViewMode::Week => write!(f, "week"),
            ViewMode::Day => write!(f, "day"),
        }
    }
}

/// Persisted snapshot of the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarState {
    pub events: Vec<CalendarEvent>,
    pub view_mode: ViewMode,
}

pub struct EventStore {
    state: CalendarState,
    storage: Arc<dyn Storage>,
}

impl EventStore {
    /// Load the persisted snapshot, or start from `initial` when nothing has
    /// been saved yet. Nothing is written until the first mutation.
    pub fn load(storage: Arc<dyn Storage>, initial: Vec<CalendarEvent>) -> SmartCalResult<Self> {
        let state = match load_record::<CalendarState>(storage.as_ref(), EVENTS_KEY)? {
            Some(state) => {
                debug!(events = state.events.len(), "loaded calendar state");
                state
            }
            None => {
                debug!(events = initial.len(), "no saved calendar state, using initial events");
                CalendarState {
                    events: initial,
                    view_mode: ViewMode::default(),
                }
            }
        };

        Ok(EventStore { state, storage })
    }

    pub fn list_events(&self) -> &[CalendarEvent] {
        &self.state.events
    }

    pub fn get_event(&self, id: &str) -> Option<&CalendarEvent> {
        self.state.events.iter().find(|e| e.id == id)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    /// Append a new event. Rejects invalid events and ids already in use.
    pub fn add_event(&mut self, event: CalendarEvent) -> SmartCalResult<()> {
        event.validate()?;

        if self.get_event(&event.id).is_some() {
            return Err(SmartCalError::Validation(format!(
                "an event with id '{}' already exists",
                event.id
            )));
        }

        debug!(id = %event.id, date = %event.date, "adding event");
        self.state.events.push(event);
        self.save()
    }

    /// Move an event to another day, keeping its start time and duration.
    pub fn move_event(&mut self, id: &str, new_date: NaiveDate) -> SmartCalResult<()> {
        let event = self
            .state
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| SmartCalError::NotFound(id.to_string()))?;

        debug!(id, from = %event.date, to = %new_date, "moving event");
        event.date = new_date;
        self.save()
    }

    pub fn delete_event(&mut self, id: &str) -> SmartCalResult<()> {
        let index = self
            .state
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SmartCalError::NotFound(id.to_string()))?;

        debug!(id, "deleting event");
        self.state.events.remove(index);
        self.save()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> SmartCalResult<()> {
        if mode == ViewMode::Week {
            return Err(SmartCalError::Validation("week view is not available".into()));
        }

        self.state.view_mode = mode;
        self.save()
    }

    /// Flip between month and focus (day) mode.
    pub fn toggle_view_mode(&mut self) -> SmartCalResult<ViewMode> {
        let next = match self.state.view_mode {
            ViewMode::Month => ViewMode::Day,
            ViewMode::Day | ViewMode::Week => ViewMode::Month,
        };
        self.set_view_mode(next)?;
        Ok(next)
    }

    /// Write the current snapshot. On failure the in-memory state is kept as is.
    pub fn save(&self) -> SmartCalResult<()> {
        save_record(self.storage.as_ref(), EVENTS_KEY, &self.state)
            .inspect_err(|e| warn!(error = %e, "failed to persist calendar state"))
    }
}
