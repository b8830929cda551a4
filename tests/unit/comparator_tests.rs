// Table-driven tests for day comparison and string helpers

use rust_date_picker::models::day::CalendarDay;
use rust_date_picker::utils::date::{
    days_equal, days_equal_opt, days_is_after, days_is_before, parse_date, stringify_calendar_day,
    stringify_date, DateParseError, ParsedDate,
};
use test_case::test_case;

fn day(year: i32, month: i32, d: i32) -> CalendarDay {
    CalendarDay::new(year, month, d)
}

#[test_case(day(2024, 5, 10), day(2024, 5, 11), true, false ; "next day")]
#[test_case(day(2024, 5, 30), day(2024, 6, 1), true, false ; "month boundary")]
#[test_case(day(2024, 11, 31), day(2025, 0, 1), true, false ; "year boundary")]
#[test_case(day(2024, 5, 10), day(2024, 5, 10), false, false ; "same day")]
#[test_case(day(2025, 0, 1), day(2024, 11, 31), false, true ; "reverse")]
fn test_before_after(a: CalendarDay, b: CalendarDay, before: bool, after: bool) {
    assert_eq!(days_is_before(&a, &b), before);
    assert_eq!(days_is_after(&a, &b), after);
}

#[test_case(&day(2024, 5, 3), "-", true, "2024-06-03" ; "padded dash")]
#[test_case(&day(2024, 10, 23), "-", true, "2024-11-23" ; "two digit parts")]
#[test_case(&day(2024, 0, 5), "/", false, "2024/1/5" ; "unpadded slash")]
#[test_case(&day(987, 8, 9), ".", true, "987.09.09" ; "short year kept")]
fn test_stringify_calendar_day(d: &CalendarDay, split: &str, pad: bool, expected: &str) {
    assert_eq!(stringify_calendar_day(d, split, pad), expected);
}

#[test]
fn test_stringify_date_month_only() {
    assert_eq!(stringify_date(2024, 1, None, "-", true), "2024-02");
}

#[test_case("2024-06-03", "-", ParsedDate { year: 2024, month: 5, day: 3 } ; "padded")]
#[test_case("2024/1/5", "/", ParsedDate { year: 2024, month: 0, day: 5 } ; "unpadded")]
fn test_parse_date(input: &str, split: &str, expected: ParsedDate) {
    assert_eq!(parse_date(input, split), Ok(expected));
}

#[test]
fn test_parse_date_wrong_separator() {
    assert_eq!(
        parse_date("2024/06/03", "-"),
        Err(DateParseError::WrongShape("-".to_string(), "2024/06/03".to_string()))
    );
}

#[test]
fn test_equality_requires_all_components() {
    assert!(days_equal(&day(2024, 5, 10), &day(2024, 5, 10)));
    assert!(!days_equal(&day(2024, 5, 10), &day(2023, 5, 10)));
    assert!(!days_equal(&day(2024, 5, 10), &day(2024, 4, 10)));
    assert!(!days_equal_opt(Some(&CalendarDay::EMPTY), Some(&day(2024, 5, 10))));
}
