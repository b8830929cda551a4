//! Month grid generation.
//!
//! Builds the week-by-week matrix of [`CalendarDay`]s for one month. Cells
//! outside the month are `None`, never days borrowed from a neighbouring
//! month. "Today" is always passed in so a grid is a pure function of its
//! inputs.

use chrono::{Datelike, NaiveDate};

use crate::models::day::{CalendarDay, CalendarWeeks, Relative};
use crate::utils::date::days_in_month;

/// Host predicate rejecting individual dates.
pub type DisabledDate = dyn Fn(NaiveDate) -> bool;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEK_DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Header title such as `"February 2021"`; `month` is 0-based.
pub fn calendar_title(year: i32, month: u32) -> String {
    let name = MONTH_NAMES.get(month as usize).copied().unwrap_or("?");
    format!("{} {}", name, year)
}

/// One-letter column headers, Sunday first.
pub fn week_day_headers() -> [char; 7] {
    WEEK_DAY_NAMES.map(|name| name.chars().next().unwrap_or(' '))
}

/// Number of grid rows for a month: 6 when the leading blanks push the
/// month past five weeks, else 5.
pub fn week_count(days_in_month: u32, first_day_of_month: u32) -> usize {
    if 35 < days_in_month + first_day_of_month {
        6
    } else {
        5
    }
}

/// Generate the week matrix for `year` and 0-based `month`.
///
/// Every day is classified against `today` and checked with `disabled`
/// (absent predicate means every day is enabled). An out-of-range month
/// yields an empty matrix.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rust_date_picker::services::grid::generate_calendar_weeks;
///
/// let today = NaiveDate::from_ymd_opt(2021, 2, 15).unwrap();
/// let weeks = generate_calendar_weeks(2021, 1, today, None);
/// assert_eq!(weeks.len(), 5);
/// assert!(weeks[0][0].is_none());
/// assert_eq!(weeks[0][1].unwrap().day, 1);
/// ```
pub fn generate_calendar_weeks(
    year: i32,
    month: u32,
    today: NaiveDate,
    disabled: Option<&DisabledDate>,
) -> CalendarWeeks {
    let (Some(first_date), Some(days_in_month)) = (
        NaiveDate::from_ymd_opt(year, month + 1, 1),
        days_in_month(year, month),
    ) else {
        log::warn!("Cannot build calendar for {}-{}: not a valid month", year, month + 1);
        return Vec::new();
    };

    let first_day_of_month = first_date.weekday().num_days_from_sunday();
    let rows = week_count(days_in_month, first_day_of_month);

    let mut weeks = Vec::with_capacity(rows);
    for week_of_month in 0..rows {
        let mut week = [None; 7];
        for (day_of_week, cell) in week.iter_mut().enumerate() {
            let day = (week_of_month * 7 + day_of_week + 1) as i64 - first_day_of_month as i64;
            if day < 1 || day > days_in_month as i64 {
                continue;
            }

            let Some(date) = first_date.with_day(day as u32) else {
                continue;
            };
            *cell = Some(CalendarDay {
                year,
                month: month as i32,
                week_of_month: week_of_month as i32,
                day: day as i32,
                day_of_week: day_of_week as i32,
                relative: Relative::classify(date, today),
                disabled: disabled.map(|f| f(date)).unwrap_or(false),
            });
        }
        weeks.push(week);
    }

    weeks
}

/// Describe an arbitrary date the same way the grid would.
pub fn get_date_details(date: NaiveDate, today: NaiveDate, disabled: Option<&DisabledDate>) -> CalendarDay {
    let first_day_of_month = date
        .with_day(1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);

    CalendarDay {
        year: date.year(),
        month: date.month0() as i32,
        week_of_month: ((date.day() - 1 + first_day_of_month) / 7) as i32,
        day: date.day() as i32,
        day_of_week: date.weekday().num_days_from_sunday() as i32,
        relative: Relative::classify(date, today),
        disabled: disabled.map(|f| f(date)).unwrap_or(false),
    }
}

/// Days that are present in the grid.
pub fn grid_days(weeks: &CalendarWeeks) -> impl Iterator<Item = &CalendarDay> {
    weeks.iter().flat_map(|week| week.iter().flatten())
}

/// True when the grid holds no enabled day.
pub fn is_fully_disabled(weeks: &CalendarWeeks) -> bool {
    grid_days(weeks).all(|day| day.disabled)
}
