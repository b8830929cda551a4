//! Selection model.
//!
//! Types shared between the selection engine and the host controller: the
//! interaction mode, the committed selection with its hover preview, the value
//! a host can feed in and the payload emitted on every committed change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::day::CalendarDay;

/// How clicks turn into a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
    Multiple,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Single => "single",
            SelectionMode::Range => "range",
            SelectionMode::Multiple => "multiple",
        }
    }
}

/// Which range endpoint the next range-mode click fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveIndex {
    #[default]
    Start,
    End,
}

impl ActiveIndex {
    pub fn index(self) -> usize {
        match self {
            ActiveIndex::Start => 0,
            ActiveIndex::End => 1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ActiveIndex::Start => ActiveIndex::End,
            ActiveIndex::End => ActiveIndex::Start,
        }
    }
}

/// Committed selection plus the ephemeral hover preview.
///
/// Owned by the host; the engine only maps one state to the next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Committed days, always chronologically ordered.
    pub calendar_value: Vec<CalendarDay>,
    /// Preview shown while hovering in range mode. Never emitted.
    pub hover_range_value: Vec<CalendarDay>,
    pub active_index: ActiveIndex,
    /// Both range endpoints are committed.
    pub is_range: bool,
}

impl SelectionState {
    /// State after a range reset: `day` (if any) as the only endpoint, the
    /// next click filling the end slot.
    pub fn reset(day: Option<CalendarDay>) -> Self {
        let value: Vec<CalendarDay> = day.into_iter().collect();
        Self {
            calendar_value: value.clone(),
            hover_range_value: value,
            active_index: ActiveIndex::End,
            is_range: false,
        }
    }
}

/// Externally supplied selection, shaped by mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarValue {
    Single(NaiveDate),
    Range(NaiveDate, NaiveDate),
    Multiple(Vec<NaiveDate>),
}

impl CalendarValue {
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            CalendarValue::Single(date) => vec![*date],
            CalendarValue::Range(start, end) => vec![*start, *end],
            CalendarValue::Multiple(dates) => dates.clone(),
        }
    }
}

/// Payload of `on_day_change`: a bare date in single mode, a list otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayChange {
    /// Toggling the selected day off also reports that day.
    Single(Option<NaiveDate>),
    List(Vec<NaiveDate>),
}

impl DayChange {
    /// Emitted dates as a list regardless of shape.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            DayChange::Single(date) => date.iter().copied().collect(),
            DayChange::List(dates) => dates.clone(),
        }
    }
}

/// Derived per-day flags consumed by rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayState {
    /// Strictly between the two preview endpoints.
    pub is_range: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub is_past: bool,
    pub is_now: bool,
    pub is_disabled: bool,
    pub is_available: bool,
}
