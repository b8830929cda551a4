// Date utility functions
// Day comparison, ordering and string conversion helpers

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::models::day::CalendarDay;

/// True when year, month and day all match.
pub fn days_equal(a: &CalendarDay, b: &CalendarDay) -> bool {
    a.year == b.year && a.month == b.month && a.day == b.day
}

/// Like [`days_equal`], but an absent side compares as [`CalendarDay::EMPTY`].
///
/// An absent argument is not a wildcard: it only matches another absent
/// argument (or the sentinel itself). Guard with [`is_empty_calendar_day`]
/// where that matters.
pub fn days_equal_opt(a: Option<&CalendarDay>, b: Option<&CalendarDay>) -> bool {
    let empty = CalendarDay::EMPTY;
    days_equal(a.unwrap_or(&empty), b.unwrap_or(&empty))
}

pub fn is_empty_calendar_day(day: &CalendarDay) -> bool {
    days_equal(day, &CalendarDay::EMPTY)
}

/// Strictly before. Days that are not real dates are never before anything.
pub fn days_is_before(current: &CalendarDay, target: &CalendarDay) -> bool {
    match (current.to_naive_date(), target.to_naive_date()) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// Strictly after. Days that are not real dates are never after anything.
pub fn days_is_after(current: &CalendarDay, target: &CalendarDay) -> bool {
    match (current.to_naive_date(), target.to_naive_date()) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// Stable ascending sort by date.
///
/// Days that are not real dates fall back to their raw `(year, month, day)`
/// components so the order stays total.
pub fn order_days(mut days: Vec<CalendarDay>) -> Vec<CalendarDay> {
    days.sort_by(|a, b| match (a.to_naive_date(), b.to_naive_date()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => (a.year, a.month, a.day).cmp(&(b.year, b.month, b.day)),
    });
    days
}

/// Render `year`, 0-based `month` and optional `day` joined by `split`.
///
/// The month is shifted to 1-based. A missing or zero day is left out,
/// giving `YYYY-MM`.
pub fn stringify_date(year: i32, month: i32, day: Option<i32>, split: &str, prefix_zero: bool) -> String {
    let pad = |value: i32| {
        if prefix_zero && (0..10).contains(&value) {
            format!("0{}", value)
        } else {
            value.to_string()
        }
    };

    let mut parts = vec![year.to_string(), pad(month + 1)];
    if let Some(day) = day.filter(|d| *d != 0) {
        parts.push(pad(day));
    }
    parts.join(split)
}

/// Render a day as `YYYY-MM-DD` (with the given separator and padding).
///
/// # Examples
/// ```
/// use rust_date_picker::models::day::CalendarDay;
/// use rust_date_picker::utils::date::stringify_calendar_day;
///
/// let day = CalendarDay::new(2024, 5, 3);
/// assert_eq!(stringify_calendar_day(&day, "-", true), "2024-06-03");
/// assert_eq!(stringify_calendar_day(&day, "/", false), "2024/6/3");
/// ```
pub fn stringify_calendar_day(day: &CalendarDay, split: &str, prefix_zero: bool) -> String {
    stringify_date(day.year, day.month, Some(day.day), split, prefix_zero)
}

/// Date components parsed back from a stringified day. `month` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("expected year{0}month{0}day, got {1:?}")]
    WrongShape(String, String),
    #[error("invalid number {0:?} in date")]
    InvalidNumber(String),
}

/// Inverse of [`stringify_calendar_day`].
pub fn parse_date(input: &str, split: &str) -> Result<ParsedDate, DateParseError> {
    let parts: Vec<&str> = input.trim().split(split).collect();
    if parts.len() != 3 {
        return Err(DateParseError::WrongShape(split.to_string(), input.to_string()));
    }

    let number = |part: &str| {
        part.parse::<i32>()
            .map_err(|_| DateParseError::InvalidNumber(part.to_string()))
    };

    Ok(ParsedDate {
        year: number(parts[0])?,
        month: number(parts[1])? - 1,
        day: number(parts[2])?,
    })
}

/// Copy of `origin` with `index` set to `value`. An index past the end
/// appends instead of leaving a gap.
pub fn fill_index<T: Clone>(origin: &[T], index: usize, value: T) -> Vec<T> {
    let mut clone = origin.to_vec();
    if index < clone.len() {
        clone[index] = value;
    } else {
        clone.push(value);
    }
    clone
}

/// Remove duplicate dates, keeping the first occurrence of each.
pub fn filter_date_list(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut seen = HashSet::new();
    dates.iter().copied().filter(|d| seen.insert(*d)).collect()
}

/// Days in a month; `month` is 0-based. `None` for a month outside `0..12`
/// or a year chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = match month {
        0..=10 => (year, month + 2),
        11 => (year.checked_add(1)?, 1),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
}

/// Plain date for a day, as handed to the host callbacks.
pub fn transform_day_info_to_date(day: &CalendarDay) -> Option<NaiveDate> {
    day.to_naive_date()
}
