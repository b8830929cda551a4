//! Month navigation and the forward "research" seek.

use chrono::NaiveDate;

use crate::models::day::CalendarWeeks;
use crate::services::grid::{generate_calendar_weeks, is_fully_disabled, DisabledDate};

/// Month after `month` (0-based), rolling December into January.
pub fn get_next_date(year: i32, month: u32) -> (i32, u32) {
    if month >= 11 {
        (year + 1, 0)
    } else {
        (year, month + 1)
    }
}

/// Month before `month` (0-based), rolling January back into December.
pub fn get_prev_date(year: i32, month: u32) -> (i32, u32) {
    if month == 0 {
        (year - 1, 11)
    } else {
        (year, month - 1)
    }
}

/// Outcome of [`get_calendar_weeks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekResult {
    pub weeks: CalendarWeeks,
    pub year: i32,
    pub month: u32,
}

impl SeekResult {
    /// True when the budget ran out on a month with no enabled day.
    pub fn is_exhausted(&self) -> bool {
        is_fully_disabled(&self.weeks)
    }
}

/// Grid for the first month, from `year`/`month` onward, that has an
/// enabled day.
///
/// Advances at most `research_range_month` times, so at most
/// `research_range_month + 1` grids are generated. When the budget runs
/// out the last (fully disabled) grid is returned as-is.
pub fn get_calendar_weeks(
    year: i32,
    month: u32,
    today: NaiveDate,
    disabled: Option<&DisabledDate>,
    research_range_month: u32,
) -> SeekResult {
    let mut year = year;
    let mut month = month;
    let mut budget = research_range_month;
    let mut weeks = generate_calendar_weeks(year, month, today, disabled);

    while is_fully_disabled(&weeks) && budget > 0 {
        budget -= 1;
        (year, month) = get_next_date(year, month);
        weeks = generate_calendar_weeks(year, month, today, disabled);
    }

    let result = SeekResult { weeks, year, month };
    if result.is_exhausted() {
        log::warn!(
            "No enabled day found within {} months; showing {}-{:02}",
            research_range_month,
            year,
            month + 1
        );
    } else {
        log::debug!("Calendar seek settled on {}-{:02}", year, month + 1);
    }
    result
}
