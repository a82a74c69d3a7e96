//! Core of the SmartCal calendar demo.
//!
//! - `store` holds the events and the current view mode, persisted through `storage`
//! - `grid` and `agenda` project the event list into a month grid and a day agenda
//! - `toast` is the auto-expiring notification queue
//! - `app` ties the pieces together for a front end

pub mod agenda;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod seed;
pub mod storage;
pub mod store;
pub mod suggest;
pub mod theme;
pub mod toast;

pub use error::{SmartCalError, SmartCalResult};
pub use event::{CalendarEvent, EventDraft, EventKind, Priority, StartTime};
