// Property-based tests for grid generation and month seeking

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_date_picker::services::grid::{generate_calendar_weeks, grid_days, DisabledDate};
use rust_date_picker::services::navigator::{get_calendar_weeks, get_next_date, get_prev_date};
use rust_date_picker::utils::date::days_in_month;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// Months between `(from_year, from_month)` and the month of `date`.
fn months_between(from_year: i32, from_month: u32, date: NaiveDate) -> i64 {
    (date.year() as i64 - from_year as i64) * 12 + date.month0() as i64 - from_month as i64
}

proptest! {
    /// Property: every day of the month appears exactly once, in order
    #[test]
    fn prop_grid_covers_month_exactly(year in 1900..2100i32, month in 0..12u32) {
        let weeks = generate_calendar_weeks(year, month, today(), None);
        let days: Vec<i32> = grid_days(&weeks).map(|d| d.day).collect();
        let expected: Vec<i32> = (1..=days_in_month(year, month).unwrap() as i32).collect();
        prop_assert_eq!(days, expected);
    }

    /// Property: 5 or 6 rows, 6 exactly when the month overflows five weeks
    #[test]
    fn prop_row_count(year in 1900..2100i32, month in 0..12u32) {
        let weeks = generate_calendar_weeks(year, month, today(), None);
        let first = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
        let first_day_of_month = first.weekday().num_days_from_sunday() as i64;
        let overflow = 35 - (days_in_month(year, month).unwrap() as i64) < first_day_of_month;
        prop_assert_eq!(weeks.len(), if overflow { 6 } else { 5 });
    }

    /// Property: cell position matches the real weekday of the date
    #[test]
    fn prop_cells_match_weekday(year in 1900..2100i32, month in 0..12u32) {
        let weeks = generate_calendar_weeks(year, month, today(), None);
        for (row, week) in weeks.iter().enumerate() {
            for (column, cell) in week.iter().enumerate() {
                if let Some(day) = cell {
                    let date = day.to_naive_date().unwrap();
                    prop_assert_eq!(date.weekday().num_days_from_sunday() as usize, column);
                    prop_assert_eq!(day.week_of_month as usize, row);
                }
            }
        }
    }

    /// Property: next and previous month are inverses
    #[test]
    fn prop_next_prev_inverse(year in 1900..2100i32, month in 0..12u32) {
        let (ny, nm) = get_next_date(year, month);
        prop_assert_eq!(get_prev_date(ny, nm), (year, month));
        prop_assert!(nm < 12);
    }

    /// Property: the seek lands on the first enabled month, or stops after
    /// exactly `budget` advances
    #[test]
    fn prop_seek_respects_budget(
        year in 2000..2050i32,
        month in 0..12u32,
        disabled_months in 0..10i64,
        budget in 0..10u32,
    ) {
        let predicate: &DisabledDate =
            &move |d: NaiveDate| months_between(year, month, d) < disabled_months;
        let result = get_calendar_weeks(year, month, today(), Some(predicate), budget);

        let landed = NaiveDate::from_ymd_opt(result.year, result.month + 1, 1).unwrap();
        let advanced = months_between(year, month, landed);
        prop_assert_eq!(advanced, disabled_months.min(budget as i64));
        prop_assert_eq!(result.is_exhausted(), (budget as i64) < disabled_months);
    }
}
