pub mod config;
pub mod day;
pub mod delete;
pub mod month;
pub mod new;
pub mod reschedule;
pub mod suggest;
pub mod theme;
pub mod view;
