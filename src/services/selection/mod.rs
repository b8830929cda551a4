//! Selection engine.
//!
//! Pure transitions from the current [`SelectionState`] and an interaction
//! (click, hover, pointer leave) to the next state. The engine keeps nothing
//! between calls and performs no disabled check; gating clicks on disabled
//! days is left to the caller.

use crate::models::day::{CalendarDay, Relative};
use crate::models::selection::{ActiveIndex, DayChange, DayState, SelectionMode, SelectionState};
use crate::utils::date::{
    days_equal, days_equal_opt, days_is_after, fill_index, order_days, transform_day_info_to_date,
};

/// Next state and the value to hand to `on_day_change`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub state: SelectionState,
    pub change: DayChange,
}

pub struct SelectionEngine;

impl SelectionEngine {
    /// Apply a click on `day` in `mode`.
    pub fn click(mode: SelectionMode, state: &SelectionState, day: CalendarDay) -> SelectionOutcome {
        match mode {
            SelectionMode::Single => Self::single_click(state, day),
            SelectionMode::Range => Self::range_click(state, day),
            SelectionMode::Multiple => Self::multiple_click(state, day),
        }
    }

    /// Recompute the hover preview for `day`.
    ///
    /// Only range mode with an open range previews; otherwise the state is
    /// returned unchanged.
    pub fn hover(mode: SelectionMode, state: &SelectionState, day: CalendarDay) -> SelectionState {
        if mode != SelectionMode::Range || state.is_range {
            return state.clone();
        }

        let preview = fill_index(&state.calendar_value, state.active_index.index(), day);
        SelectionState {
            hover_range_value: order_days(preview),
            ..state.clone()
        }
    }

    /// Pointer left the grid: drop a dangling preview back to the single
    /// committed endpoint.
    pub fn leave(mode: SelectionMode, state: &SelectionState) -> SelectionState {
        if mode == SelectionMode::Range && !state.is_range && state.calendar_value.len() == 1 {
            return SelectionState {
                hover_range_value: state.calendar_value.clone(),
                ..state.clone()
            };
        }
        state.clone()
    }

    fn single_click(state: &SelectionState, day: CalendarDay) -> SelectionOutcome {
        if days_equal_opt(Some(&day), state.calendar_value.first()) {
            return SelectionOutcome {
                state: SelectionState {
                    calendar_value: Vec::new(),
                    ..state.clone()
                },
                change: DayChange::Single(transform_day_info_to_date(&day)),
            };
        }

        SelectionOutcome {
            state: SelectionState {
                calendar_value: vec![day],
                ..state.clone()
            },
            change: DayChange::Single(transform_day_info_to_date(&day)),
        }
    }

    fn range_click(state: &SelectionState, day: CalendarDay) -> SelectionOutcome {
        let change = DayChange::List(transform_day_info_to_date(&day).into_iter().collect());

        // Re-clicking the start endpoint clears the range.
        if days_equal_opt(Some(&day), state.calendar_value.first()) {
            log::debug!("Range start re-clicked, clearing selection");
            return SelectionOutcome {
                state: SelectionState::reset(None),
                change,
            };
        }

        // A closed range starts over from the clicked day.
        if state.calendar_value.len() >= 2 {
            return SelectionOutcome {
                state: SelectionState::reset(Some(day)),
                change,
            };
        }

        // Nothing committed yet always fills the start slot.
        let slot = if state.calendar_value.is_empty() {
            ActiveIndex::Start
        } else {
            state.active_index
        };
        let ordered = order_days(fill_index(&state.calendar_value, slot.index(), day));

        SelectionOutcome {
            change: DayChange::List(ordered.iter().filter_map(transform_day_info_to_date).collect()),
            state: SelectionState {
                hover_range_value: ordered.clone(),
                calendar_value: ordered,
                active_index: slot.toggled(),
                is_range: slot == ActiveIndex::End,
            },
        }
    }

    fn multiple_click(state: &SelectionState, day: CalendarDay) -> SelectionOutcome {
        let mut value = state.calendar_value.clone();
        match value.iter().position(|d| days_equal(d, &day)) {
            Some(index) => {
                value.remove(index);
            }
            None => {
                value.push(day);
                value = order_days(value);
            }
        }

        SelectionOutcome {
            change: DayChange::List(value.iter().filter_map(transform_day_info_to_date).collect()),
            state: SelectionState {
                calendar_value: value,
                ..state.clone()
            },
        }
    }
}

/// Strictly between the two preview endpoints.
pub fn is_in_range(current: &CalendarDay, hover_range_value: &[CalendarDay]) -> bool {
    match hover_range_value {
        [start, end, ..] => days_is_after(current, start) && days_is_after(end, current),
        _ => false,
    }
}

pub fn is_in_start(current: &CalendarDay, hover_range_value: &[CalendarDay]) -> bool {
    hover_range_value
        .first()
        .is_some_and(|start| days_equal(current, start))
}

pub fn is_in_end(current: &CalendarDay, hover_range_value: &[CalendarDay]) -> bool {
    hover_range_value
        .get(1)
        .is_some_and(|end| days_equal(current, end))
}

/// Per-day flags for rendering. Availability only reflects the day being in
/// the past; the disabled flag is reported separately.
pub fn get_day_state(current: &CalendarDay, hover_range_value: &[CalendarDay]) -> DayState {
    let is_past = current.relative == Relative::Past;
    DayState {
        is_range: is_in_range(current, hover_range_value),
        is_start: is_in_start(current, hover_range_value),
        is_end: is_in_end(current, hover_range_value),
        is_past,
        is_now: current.relative == Relative::Now,
        is_disabled: current.disabled,
        is_available: !is_past,
    }
}
