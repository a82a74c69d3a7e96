use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use smartcal_core::agenda::day_agenda;
use smartcal_core::app::App;
use smartcal_core::grid::MonthGrid;
use smartcal_core::seed::demo_events;
use smartcal_core::storage::FileStorage;
use smartcal_core::store::{EventStore, ViewMode};
use smartcal_core::{CalendarEvent, EventDraft, EventKind, Priority};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn moved_event_survives_restart_with_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()));

    let mut store = EventStore::load(storage.clone(), Vec::new()).unwrap();
    store
        .add_event(CalendarEvent {
            id: "1".into(),
            title: "Product Strategy".into(),
            date: date(2024, 5, 10),
            start_time: "10:00".parse().unwrap(),
            duration: 60,
            priority: Priority::High,
            kind: EventKind::Meeting,
        })
        .unwrap();
    store.move_event("1", date(2024, 5, 12)).unwrap();
    let before = store.list_events().to_vec();
    drop(store);

    let restarted = EventStore::load(Arc::new(FileStorage::new(dir.path())), Vec::new()).unwrap();

    assert_eq!(restarted.list_events(), before.as_slice());
    let event = restarted.get_event("1").unwrap();
    assert_eq!(event.date, date(2024, 5, 12));
    assert_eq!(event.start_time.as_str(), "10:00");
}

#[test]
fn grid_and_agenda_follow_store_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let today = date(2024, 5, 31);
    let mut store =
        EventStore::load(Arc::new(FileStorage::new(dir.path())), demo_events(today).unwrap()).unwrap();

    // "Lunch with Client" is seeded three days out, in June
    let grid = MonthGrid::new(today);
    let lunch = store.get_event("4").unwrap().clone();
    assert_eq!(lunch.date, date(2024, 6, 3));
    assert!(!grid.days().contains(&lunch.date));

    store.move_event("4", today).unwrap();

    let agenda = day_agenda(store.list_events(), today);
    let titles: Vec<_> = agenda.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Product Strategy", "Lunch with Client"]);
    assert_eq!(grid.days().last().map(|d| d.weekday()), Some(Weekday::Sat));
}

#[tokio::test(start_paused = true)]
async fn app_state_and_theme_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = App::load(Arc::new(FileStorage::new(dir.path())), Vec::new()).unwrap();
    let id = app
        .create_event(EventDraft::new(date(2024, 5, 10)).with_title("  Weekly Sync  "))
        .unwrap();
    app.events.set_view_mode(ViewMode::Day).unwrap();
    app.theme.toggle_theme().unwrap();

    let reloaded = App::load(Arc::new(FileStorage::new(dir.path())), Vec::new()).unwrap();

    assert_eq!(reloaded.events.get_event(&id).unwrap().title, "Weekly Sync");
    assert_eq!(reloaded.events.view_mode(), ViewMode::Day);
    assert!(reloaded.theme.is_dark());
    assert!(dir.path().join("smartcal-events.json").exists());
    assert!(dir.path().join("smartcal-theme.json").exists());
}
