//! Top-level application context.
//!
//! Owns the stores and the toast queue and wires them together the way the
//! calendar widget does: mutate the store, then tell the user how it went.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::SmartCalResult;
use crate::event::{CalendarEvent, EventDraft};
use crate::storage::Storage;
use crate::store::EventStore;
use crate::theme::ThemeStore;
use crate::toast::Toaster;

pub struct App {
    pub events: EventStore,
    pub theme: ThemeStore,
    pub toaster: Toaster,
}

impl App {
    /// Load both stores from `storage`. `initial_events` is used only when no
    /// calendar state has been saved yet.
    pub fn load(storage: Arc<dyn Storage>, initial_events: Vec<CalendarEvent>) -> SmartCalResult<Self> {
        Ok(App {
            events: EventStore::load(storage.clone(), initial_events)?,
            theme: ThemeStore::load(storage)?,
            toaster: Toaster::new(),
        })
    }

    /// Create an event from the form and return its id.
    pub fn create_event(&mut self, draft: EventDraft) -> SmartCalResult<String> {
        let result = draft.into_event().and_then(|event| {
            let id = event.id.clone();
            self.events.add_event(event).map(|()| id)
        });
        self.report(result, |_| "Event created successfully".to_string())
    }

    /// Drop an event onto another day.
    pub fn reschedule(&mut self, id: &str, date: NaiveDate) -> SmartCalResult<()> {
        let result = self.events.move_event(id, date);
        self.report(result, |_| format!("Event moved to {}", date.format("%b %-d")))
    }

    pub fn remove_event(&mut self, id: &str) -> SmartCalResult<()> {
        let result = self.events.delete_event(id);
        self.report(result, |_| "Event deleted".to_string())
    }

    fn report<T>(&self, result: SmartCalResult<T>, success: impl FnOnce(&T) -> String) -> SmartCalResult<T> {
        match &result {
            Ok(value) => {
                self.toaster.success(success(value));
            }
            Err(e) => {
                self.toaster.error(e.to_string());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmartCalError;
    use crate::storage::MemoryStorage;
    use crate::toast::ToastKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app(storage: Arc<MemoryStorage>) -> App {
        App::load(storage, Vec::new()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn create_then_move_reports_each_step() {
        let mut app = app(Arc::new(MemoryStorage::new()));

        let id = app
            .create_event(EventDraft::new(date(2024, 5, 10)).with_title("Weekly Sync"))
            .unwrap();
        app.reschedule(&id, date(2024, 5, 12)).unwrap();

        assert_eq!(app.events.get_event(&id).unwrap().date, date(2024, 5, 12));

        let messages: Vec<_> = app.toaster.toasts().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, ["Event created successfully", "Event moved to May 12"]);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_create_leaves_store_untouched_and_shows_error() {
        let mut app = app(Arc::new(MemoryStorage::new()));

        let result = app.create_event(EventDraft::new(date(2024, 5, 10)));

        assert!(matches!(result, Err(SmartCalError::Validation(_))));
        assert!(app.events.list_events().is_empty());
        assert_eq!(app.toaster.toasts()[0].kind, ToastKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_id_surfaces_not_found() {
        let mut app = app(Arc::new(MemoryStorage::new()));

        assert!(matches!(app.remove_event("nope"), Err(SmartCalError::NotFound(_))));
        assert!(matches!(
            app.reschedule("nope", date(2024, 5, 1)),
            Err(SmartCalError::NotFound(_))
        ));
        assert!(app.toaster.toasts().iter().all(|t| t.kind == ToastKind::Error));
    }

    #[tokio::test(start_paused = true)]
    async fn storage_failure_keeps_event_for_the_session() {
        let storage = Arc::new(MemoryStorage::new());
        let mut app = app(storage.clone());
        storage.set_fail_writes(true);

        let result = app.create_event(EventDraft::new(date(2024, 5, 10)).with_title("Offline"));

        assert!(matches!(result, Err(SmartCalError::Persistence(_))));
        assert_eq!(app.events.list_events().len(), 1);
        assert_eq!(app.toaster.toasts()[0].kind, ToastKind::Error);
    }

    #[test]
    fn operations_work_without_a_runtime() {
        let mut app = app(Arc::new(MemoryStorage::new()));

        let id = app
            .create_event(EventDraft::new(date(2024, 5, 10)).with_title("x"))
            .unwrap();
        assert!(matches!(
            app.create_event(EventDraft::new(date(2024, 5, 10))),
            Err(SmartCalError::Validation(_))
        ));
        app.remove_event(&id).unwrap();

        let kinds: Vec<_> = app.toaster.toasts().into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [ToastKind::Success, ToastKind::Error, ToastKind::Success]);
    }

    #[tokio::test(start_paused = true)]
    async fn theme_and_events_share_storage_without_clashing() {
        let storage = Arc::new(MemoryStorage::new());
        let mut app = app(storage.clone());
        app.theme.toggle_theme().unwrap();
        app.create_event(EventDraft::new(date(2024, 5, 10)).with_title("Focus"))
            .unwrap();

        let reloaded = App::load(storage, Vec::new()).unwrap();
        assert!(reloaded.theme.is_dark());
        assert_eq!(reloaded.events.list_events().len(), 1);
    }
}
