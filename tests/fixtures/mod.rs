// Test fixtures - reusable test data
// Provides consistent dates and controllers across integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_date_picker::models::day::CalendarDay;
use rust_date_picker::models::selection::SelectionMode;
use rust_date_picker::services::calendar::CalendarController;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Fixed "today": Monday, June 10, 2024
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    /// Returns Feb 1, 2021 (a Monday)
    pub fn feb_1_2021() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 2, 1).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn june_2024(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }
}

/// Controller pinned to [`dates::today`] in the given mode.
pub fn controller(mode: SelectionMode) -> CalendarController {
    CalendarController::builder()
        .mode(mode)
        .today(dates::today())
        .build()
        .expect("default settings are valid")
}

/// Day `day` of the controller's displayed month.
pub fn cell(controller: &CalendarController, day: i32) -> CalendarDay {
    controller
        .weeks()
        .iter()
        .flatten()
        .flatten()
        .find(|c| c.day == day)
        .copied()
        .unwrap_or_else(|| panic!("day {} not in grid", day))
}
