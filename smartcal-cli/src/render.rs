//! TUI rendering for SmartCal types.
//!
//! Colors follow the widget: red for high priority, yellow for medium, blue
//! for low. Padding days from neighbouring months are dimmed.

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use smartcal_core::agenda::events_on;
use smartcal_core::grid::MonthGrid;
use smartcal_core::toast::{Toast, ToastKind};
use smartcal_core::{CalendarEvent, Priority};

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Width of one month grid cell, not counting the separating space
const CELL_WIDTH: usize = 12;

/// Events listed per cell before collapsing into "+N more"
const CELL_EVENT_LIMIT: usize = 3;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Priority {
    fn render(&self) -> String {
        colorize_priority(*self, &format!("[{}]", self))
    }
}

impl Render for Toast {
    fn render(&self) -> String {
        match self.kind {
            ToastKind::Success => format!("{} {}", "✓".green(), self.message.green()),
            ToastKind::Info => format!("{} {}", "•".cyan(), self.message),
            ToastKind::Error => format!("{} {}", "✗".red(), self.message.red()),
        }
    }
}

impl Render for CalendarEvent {
    /// One focus-mode row: time, priority bar, title, details, id.
    fn render(&self) -> String {
        let bar = colorize_priority(self.priority, "▌");
        let details = format!("{} • {}m", self.kind, self.duration);
        format!(
            "  {}  {} {}  {}  {}  {}",
            self.start_time.as_str().bold(),
            bar,
            self.title,
            details.dimmed(),
            self.priority.render(),
            self.id.dimmed()
        )
    }
}

fn colorize_priority(priority: Priority, text: &str) -> String {
    match priority {
        Priority::High => text.red().to_string(),
        Priority::Medium => text.yellow().to_string(),
        Priority::Low => text.blue().to_string(),
    }
}

/// Render a month as a grid of day cells with each day's events.
pub fn render_month(grid: &MonthGrid, events: &[CalendarEvent], today: NaiveDate) -> String {
    let mut lines = Vec::new();

    lines.push(grid.month_start().format("%B %Y").to_string().bold().to_string());

    let header: Vec<String> = WEEKDAY_LABELS
        .iter()
        .map(|label| pad(label, CELL_WIDTH).dimmed().to_string())
        .collect();
    lines.push(header.join(" "));

    for week in grid.weeks() {
        let day_numbers: Vec<String> = week
            .iter()
            .map(|day| {
                let label = pad(&day.day().to_string(), CELL_WIDTH);
                if *day == today {
                    label.bold().cyan().to_string()
                } else if grid.is_in_month(*day) {
                    label
                } else {
                    label.dimmed().to_string()
                }
            })
            .collect();
        lines.push(day_numbers.join(" "));

        let cells: Vec<Vec<String>> = week.iter().map(|day| cell_lines(events, *day)).collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0);

        for row in 0..height {
            let line: Vec<String> = cells
                .iter()
                .map(|cell| cell.get(row).cloned().unwrap_or_else(|| " ".repeat(CELL_WIDTH)))
                .collect();
            lines.push(line.join(" "));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// The colored, padded lines shown under one day number.
fn cell_lines(events: &[CalendarEvent], day: NaiveDate) -> Vec<String> {
    let on_day = events_on(events, day);

    let mut lines: Vec<String> = on_day
        .iter()
        .take(CELL_EVENT_LIMIT)
        .map(|event| {
            let text = pad(&format!("{} {}", event.start_time, event.title), CELL_WIDTH);
            colorize_priority(event.priority, &text)
        })
        .collect();

    if on_day.len() > CELL_EVENT_LIMIT {
        let more = format!("+{} more", on_day.len() - CELL_EVENT_LIMIT);
        lines.push(pad(&more, CELL_WIDTH).dimmed().to_string());
    }

    lines
}

/// Render the focus mode view for one day.
pub fn render_agenda(date: NaiveDate, agenda: &[&CalendarEvent], today: NaiveDate) -> String {
    let heading = if date == today {
        "Today's Focus".to_string()
    } else {
        format!("Focus for {}", date.format("%a %b %-d"))
    };

    let mut lines = vec![
        heading.bold().to_string(),
        format!(
            "You have {} {} scheduled.",
            agenda.len(),
            pluralize("event", agenda.len())
        )
        .dimmed()
        .to_string(),
        String::new(),
    ];

    if agenda.is_empty() {
        lines.push("  No events for today. Enjoy your free time!".dimmed().to_string());
    } else {
        lines.extend(agenda.iter().map(|event| event.render()));
    }

    lines.join("\n")
}

/// Pad or cut `text` to exactly `width` characters.
fn pad(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{}{}", text, " ".repeat(width - count))
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
