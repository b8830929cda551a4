// Property-based tests for the selection engine and day ordering

use proptest::prelude::*;
use rust_date_picker::models::day::CalendarDay;
use rust_date_picker::models::selection::{SelectionMode, SelectionState};
use rust_date_picker::services::selection::SelectionEngine;
use rust_date_picker::utils::date::{order_days, parse_date, stringify_calendar_day, ParsedDate};

/// Real days only (day 1..=28 exists in every month).
fn arb_day() -> impl Strategy<Value = CalendarDay> {
    (1990..2030i32, 0..12i32, 1..=28i32).prop_map(|(y, m, d)| CalendarDay::new(y, m, d))
}

fn click(mode: SelectionMode, state: &SelectionState, day: CalendarDay) -> SelectionState {
    SelectionEngine::click(mode, state, day).state
}

proptest! {
    /// Property: ordering twice equals ordering once
    #[test]
    fn prop_order_days_idempotent(days in prop::collection::vec(arb_day(), 0..20)) {
        let once = order_days(days);
        prop_assert_eq!(order_days(once.clone()), once);
    }

    /// Property: stringify then parse gives back the date components
    #[test]
    fn prop_stringify_parse_round_trip(day in arb_day()) {
        let parsed = parse_date(&stringify_calendar_day(&day, "-", true), "-").unwrap();
        prop_assert_eq!(parsed, ParsedDate { year: day.year, month: day.month, day: day.day });
    }

    /// Property: two range clicks give the ordered pair regardless of order
    #[test]
    fn prop_range_pair_commutes(a in arb_day(), b in arb_day()) {
        prop_assume!(a != b);
        let start = SelectionState::default();
        let ab = click(SelectionMode::Range, &click(SelectionMode::Range, &start, a), b);
        let ba = click(SelectionMode::Range, &click(SelectionMode::Range, &start, b), a);
        prop_assert_eq!(&ab.calendar_value, &order_days(vec![a, b]));
        prop_assert_eq!(&ab.calendar_value, &ba.calendar_value);
        prop_assert!(ab.is_range);
    }

    /// Property: toggling a day twice in multiple mode restores the selection
    #[test]
    fn prop_multiple_toggle_idempotent(days in prop::collection::vec(arb_day(), 0..10), extra in arb_day()) {
        let mut state = SelectionState::default();
        for day in days {
            if !state.calendar_value.contains(&day) {
                state = click(SelectionMode::Multiple, &state, day);
            }
        }
        let toggled = click(SelectionMode::Multiple, &click(SelectionMode::Multiple, &state, extra), extra);
        prop_assert_eq!(toggled.calendar_value, state.calendar_value);
    }

    /// Property: multiple selection stays sorted with no duplicates
    #[test]
    fn prop_multiple_sorted_unique(days in prop::collection::vec(arb_day(), 0..20)) {
        let mut state = SelectionState::default();
        for day in days {
            state = click(SelectionMode::Multiple, &state, day);
        }
        let value = &state.calendar_value;
        prop_assert_eq!(&order_days(value.clone()), value);
        for pair in value.windows(2) {
            prop_assert!(pair[0] != pair[1]);
        }
    }

    /// Property: single mode never holds more than one day
    #[test]
    fn prop_single_at_most_one(days in prop::collection::vec(arb_day(), 0..10)) {
        let mut state = SelectionState::default();
        for day in days {
            state = click(SelectionMode::Single, &state, day);
            prop_assert!(state.calendar_value.len() <= 1);
        }
    }

    /// Property: range mode never holds more than two days
    #[test]
    fn prop_range_at_most_two(days in prop::collection::vec(arb_day(), 0..10)) {
        let mut state = SelectionState::default();
        for day in days {
            state = click(SelectionMode::Range, &state, day);
            prop_assert!(state.calendar_value.len() <= 2);
            prop_assert_eq!(state.is_range, state.calendar_value.len() == 2);
        }
    }
}
