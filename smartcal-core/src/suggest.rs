//! "Smart Suggest": a fixed suggestion delivered after a short pause.
//!
//! There is no scheduling logic behind it. It always proposes the same
//! afternoon deep-work block.

use std::time::Duration;

use chrono::NaiveDate;

use crate::error::SmartCalResult;
use crate::event::{EventDraft, Priority, StartTime};
use crate::toast::Toaster;

/// Simulated analysis time.
pub const SUGGESTION_DELAY: Duration = Duration::from_millis(800);

const SUGGESTED_TITLE: &str = "Deep Work Session";

/// Produce a prefilled draft for `date`, announcing progress through `toaster`.
pub async fn suggest(toaster: &Toaster, date: NaiveDate) -> SmartCalResult<EventDraft> {
    toaster.info("Analyzing your schedule...");
    tokio::time::sleep(SUGGESTION_DELAY).await;

    let start_time = StartTime::from_hm(14, 0)?;
    toaster.success(format!("Suggestion found: Deep Work at {start_time}"));

    let mut draft = EventDraft::new(date).with_title(SUGGESTED_TITLE);
    draft.start_time = start_time;
    draft.priority = Priority::High;
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    #[tokio::test(start_paused = true)]
    async fn suggestion_is_fixed_and_announced() {
        let toaster = Toaster::new();
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

        let started = tokio::time::Instant::now();
        let draft = suggest(&toaster, date).await.unwrap();
        assert!(started.elapsed() >= SUGGESTION_DELAY);

        assert_eq!(draft.title, "Deep Work Session");
        assert_eq!(draft.start_time.as_str(), "14:00");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.date, date);

        let toasts = toaster.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Info);
        assert_eq!(toasts[1].message, "Suggestion found: Deep Work at 14:00");
        assert_eq!(toasts[1].kind, ToastKind::Success);
    }
}
