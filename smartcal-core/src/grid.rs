//! Month grid projection.
//!
//! Weeks start on Sunday. The grid covers whole weeks only, so adjacent-month
//! days pad the first and last rows.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Dates needed to render `reference`'s month as full Sunday-to-Saturday weeks.
///
/// At the ends of the representable date range the padding is cut short
/// where the neighbouring days do not exist.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    let last = last_of_month(reference);

    let start = first
        .checked_sub_days(Days::new(u64::from(first.weekday().num_days_from_sunday())))
        .unwrap_or(NaiveDate::MIN);
    let end = last
        .checked_add_days(Days::new(u64::from(6 - last.weekday().num_days_from_sunday())))
        .unwrap_or(NaiveDate::MAX);

    std::iter::successors(Some(start), |d| d.succ_opt().filter(|next| *next <= end)).collect()
}

/// A month's grid plus the month it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month_start: NaiveDate,
    days: Vec<NaiveDate>,
}

impl MonthGrid {
    pub fn new(reference: NaiveDate) -> Self {
        MonthGrid {
            month_start: first_of_month(reference),
            days: month_grid(reference),
        }
    }

    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Rows of seven days, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks(7)
    }

    /// False for the padding days taken from the neighbouring months.
    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.month_start.year() && date.month() == self.month_start.month()
    }
}

/// Move `date` by `months` (negative goes back), clamping the day to the
/// target month's length. Returns `date` unchanged if the result would be
/// out of range.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let step = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    shifted.unwrap_or(date)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    // only the final month of the range has no successor
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
