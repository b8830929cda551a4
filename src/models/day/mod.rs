//! Day descriptor model.
//!
//! A [`CalendarDay`] describes one cell of a month grid: its date components,
//! its position in the grid, its relation to "today" and whether the host's
//! disabled-date predicate rejected it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Temporal relation of a day to the date the grid was generated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relative {
    Past,
    Now,
    Future,
}

impl Relative {
    /// Classify `date` against `today` by full date comparison.
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        match date.cmp(&today) {
            std::cmp::Ordering::Less => Relative::Past,
            std::cmp::Ordering::Equal => Relative::Now,
            std::cmp::Ordering::Greater => Relative::Future,
        }
    }
}

/// One day of a displayed month.
///
/// `month` is 0-based (January is 0) and `day_of_week` starts at Sunday (0).
/// Use [`CalendarDay::new`] or the grid generator to obtain a real day;
/// [`CalendarDay::EMPTY`] is the sentinel used where a day is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDay {
    pub year: i32,
    pub month: i32,
    pub week_of_month: i32,
    pub day: i32,
    pub day_of_week: i32,
    pub relative: Relative,
    pub disabled: bool,
}

impl CalendarDay {
    /// Sentinel for "no day". Never equal to a day produced by the grid.
    pub const EMPTY: CalendarDay = CalendarDay {
        year: -1,
        month: -1,
        week_of_month: -1,
        day: -1,
        day_of_week: -1,
        relative: Relative::Past,
        disabled: false,
    };

    /// Create a day from its date components only.
    ///
    /// Grid position fields are zeroed and the day is treated as enabled and
    /// in the future; use `services::grid::get_date_details` for a fully
    /// populated descriptor.
    ///
    /// # Examples
    /// ```
    /// use rust_date_picker::models::day::CalendarDay;
    ///
    /// let day = CalendarDay::new(2024, 5, 10);
    /// assert_eq!(day.to_naive_date().unwrap().to_string(), "2024-06-10");
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            week_of_month: 0,
            day,
            day_of_week: 0,
            relative: Relative::Future,
            disabled: false,
        }
    }

    /// Convert to a plain calendar date, `None` when the components do not
    /// name a real Gregorian date (including the empty sentinel).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month + 1).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }

    /// Whether this is the [`CalendarDay::EMPTY`] sentinel.
    pub fn is_empty(&self) -> bool {
        self.year == Self::EMPTY.year && self.month == Self::EMPTY.month && self.day == Self::EMPTY.day
    }
}

impl Default for CalendarDay {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Week-partitioned month grid. Each row has seven cells, Sunday first;
/// `None` marks padding before the 1st or after the last day.
pub type CalendarWeeks = Vec<[Option<CalendarDay>; 7]>;
