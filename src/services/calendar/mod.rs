//! Host-side calendar controller.
//!
//! [`CalendarController`] owns everything a picker widget keeps between
//! frames: the displayed month and its grid, the committed selection with
//! its hover preview, and the settings. Rendering code reads from it and
//! forwards clicks, hovers and navigation to it; it runs the pure selection
//! engine and reports changes through a [`CalendarListener`].

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::models::day::{CalendarDay, CalendarWeeks};
use crate::models::selection::{
    ActiveIndex, CalendarValue, DayChange, DayState, SelectionMode, SelectionState,
};
use crate::models::settings::{PickerSettings, SettingsValidationError};
use crate::services::grid::{calendar_title, generate_calendar_weeks, get_date_details, DisabledDate};
use crate::services::navigator::{get_calendar_weeks, get_next_date, get_prev_date};
use crate::services::selection::{get_day_state, SelectionEngine};
use crate::utils::date::{days_equal, filter_date_list, order_days, transform_day_info_to_date};

/// Kind of input that produced a day interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Pointer,
    Keyboard,
    Touch,
}

/// Originating event passed through to the listener untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayEvent {
    pub source: InputSource,
}

/// Callbacks fired by the controller. All methods default to no-ops.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarListener {
    /// Committed selection changed.
    fn on_day_change(&mut self, _value: &DayChange) {}

    /// A day was hovered; fired before the preview is recomputed.
    fn on_day_hover(&mut self, _day: NaiveDate, _active_index: ActiveIndex, _event: &DayEvent) {}

    /// A day was clicked; fired before mode dispatch.
    fn on_day_click(&mut self, _day: NaiveDate, _event: &DayEvent) {}
}

pub struct CalendarController {
    settings: PickerSettings,
    today: NaiveDate,
    disabled: Option<Box<DisabledDate>>,
    listener: Option<Box<dyn CalendarListener>>,
    current_year: i32,
    current_month: u32,
    weeks: CalendarWeeks,
    selection: SelectionState,
}

impl fmt::Debug for CalendarController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarController")
            .field("settings", &self.settings)
            .field("today", &self.today)
            .field("has_disabled_date", &self.disabled.is_some())
            .field("current_year", &self.current_year)
            .field("current_month", &self.current_month)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl CalendarController {
    /// Controller without a listener or initial value, showing the first
    /// month from today's with an enabled day.
    pub fn new(
        settings: PickerSettings,
        today: NaiveDate,
        disabled: Option<Box<DisabledDate>>,
    ) -> Result<Self, SettingsValidationError> {
        settings.validate()?;

        let mut controller = Self {
            settings,
            today,
            disabled,
            listener: None,
            current_year: today.year(),
            current_month: today.month0(),
            weeks: Vec::new(),
            selection: SelectionState::default(),
        };
        controller.seek_from(today.year(), today.month0());
        Ok(controller)
    }

    /// Create a builder for configuring a controller
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::new()
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn mode(&self) -> SelectionMode {
        self.settings.mode
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn today_text(&self) -> &str {
        &self.settings.today_text
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Displayed month, 0-based.
    pub fn current_month(&self) -> u32 {
        self.current_month
    }

    pub fn weeks(&self) -> &CalendarWeeks {
        &self.weeks
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Header title for the displayed month, e.g. `"June 2024"`.
    pub fn title(&self) -> String {
        calendar_title(self.current_year, self.current_month)
    }

    /// Descriptor for today, with the disabled predicate applied.
    pub fn today_details(&self) -> CalendarDay {
        get_date_details(self.today, self.today, self.disabled.as_deref())
    }

    /// Replace the date used for past/now/future classification. Grids
    /// already generated keep their classification.
    pub fn update_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Handle a click on `day`. Disabled days are ignored; returns whether
    /// the click was dispatched.
    pub fn click(&mut self, day: CalendarDay, event: DayEvent) -> bool {
        if day.disabled {
            log::debug!("Ignoring click on disabled day {:?}", transform_day_info_to_date(&day));
            return false;
        }

        if let (Some(listener), Some(date)) = (self.listener.as_mut(), transform_day_info_to_date(&day)) {
            listener.on_day_click(date, &event);
        }

        let outcome = SelectionEngine::click(self.settings.mode, &self.selection, day);
        self.selection = outcome.state;
        self.emit_change(&outcome.change);
        true
    }

    /// Handle the pointer entering `day`.
    pub fn hover(&mut self, day: CalendarDay, event: DayEvent) {
        let active_index = self.selection.active_index;
        if let (Some(listener), Some(date)) = (self.listener.as_mut(), transform_day_info_to_date(&day)) {
            listener.on_day_hover(date, active_index, &event);
        }

        self.selection = SelectionEngine::hover(self.settings.mode, &self.selection, day);
    }

    /// Handle the pointer leaving the grid.
    pub fn leave(&mut self) {
        self.selection = SelectionEngine::leave(self.settings.mode, &self.selection);
    }

    pub fn next_month(&mut self) {
        let (year, month) = get_next_date(self.current_year, self.current_month);
        self.show_month(year, month);
    }

    pub fn prev_month(&mut self) {
        let (year, month) = get_prev_date(self.current_year, self.current_month);
        self.show_month(year, month);
    }

    /// Select today and bring its month into view.
    ///
    /// When today is disabled nothing changes and `false` is returned.
    pub fn go_to_today(&mut self) -> bool {
        let today = self.today_details();
        if today.disabled {
            log::warn!("Today is not available");
            return false;
        }

        let Some(date) = today.to_naive_date() else {
            return false;
        };
        self.selection = SelectionState::reset(Some(today));
        let change = match self.settings.mode {
            SelectionMode::Single => DayChange::Single(Some(date)),
            SelectionMode::Range | SelectionMode::Multiple => DayChange::List(vec![date]),
        };
        self.emit_change(&change);

        let (year, month) = (date.year(), date.month0());
        if (year, month) != (self.current_year, self.current_month) {
            self.show_month(year, month);
        }
        true
    }

    /// Load an externally supplied selection. Does not fire `on_day_change`.
    pub fn set_value(&mut self, value: &CalendarValue) {
        let limit = match self.settings.mode {
            SelectionMode::Single => 1,
            SelectionMode::Range => 2,
            SelectionMode::Multiple => usize::MAX,
        };
        let dates: Vec<NaiveDate> = filter_date_list(&value.dates()).into_iter().take(limit).collect();
        if dates.is_empty() {
            return;
        }

        let days = order_days(
            dates
                .into_iter()
                .map(|date| get_date_details(date, self.today, self.disabled.as_deref()))
                .collect(),
        );
        log::debug!("Loaded {} selected day(s) in {} mode", days.len(), self.settings.mode.as_str());

        self.selection = match self.settings.mode {
            SelectionMode::Range => {
                let closed = days.len() == 2;
                SelectionState {
                    hover_range_value: days.clone(),
                    calendar_value: days,
                    active_index: if closed { ActiveIndex::Start } else { ActiveIndex::End },
                    is_range: closed,
                }
            }
            SelectionMode::Single | SelectionMode::Multiple => SelectionState {
                calendar_value: days,
                ..self.selection.clone()
            },
        };
    }

    /// Switch mode. The selection and preview start over.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if mode != self.settings.mode {
            log::debug!("Selection mode {} -> {}", self.settings.mode.as_str(), mode.as_str());
            self.settings.mode = mode;
            self.selection = SelectionState::default();
        }
    }

    /// Change the seek budget and seek again from the displayed month.
    pub fn set_research_range_month(&mut self, research_range_month: u32) {
        self.settings.research_range_month = research_range_month;
        self.seek_from(self.current_year, self.current_month);
    }

    /// Available and part of the committed selection.
    pub fn is_selected(&self, day: &CalendarDay) -> bool {
        get_day_state(day, &self.selection.hover_range_value).is_available
            && self.selection.calendar_value.iter().any(|d| days_equal(d, day))
    }

    pub fn day_state(&self, day: &CalendarDay) -> DayState {
        get_day_state(day, &self.selection.hover_range_value)
    }

    /// Display `year`/`month` (0-based) without seeking.
    pub fn show_month(&mut self, year: i32, month: u32) {
        log::debug!("Showing {}", calendar_title(year, month));
        self.weeks = generate_calendar_weeks(year, month, self.today, self.disabled.as_deref());
        self.current_year = year;
        self.current_month = month;
    }

    fn seek_from(&mut self, year: i32, month: u32) {
        let result = get_calendar_weeks(
            year,
            month,
            self.today,
            self.disabled.as_deref(),
            self.settings.research_range_month,
        );
        self.weeks = result.weeks;
        self.current_year = result.year;
        self.current_month = result.month;
    }

    fn emit_change(&mut self, change: &DayChange) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_day_change(change);
        }
    }
}

/// Builder for [`CalendarController`].
#[derive(Default)]
pub struct CalendarBuilder {
    settings: PickerSettings,
    today: Option<NaiveDate>,
    disabled: Option<Box<DisabledDate>>,
    listener: Option<Box<dyn CalendarListener>>,
    value: Option<CalendarValue>,
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: PickerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.settings.mode = mode;
        self
    }

    pub fn research_range_month(mut self, months: u32) -> Self {
        self.settings.research_range_month = months;
        self
    }

    /// Fix "today" instead of reading the local clock.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn disabled_date(mut self, disabled: impl Fn(NaiveDate) -> bool + 'static) -> Self {
        self.disabled = Some(Box::new(disabled));
        self
    }

    pub fn listener(mut self, listener: impl CalendarListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn value(mut self, value: CalendarValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Build the controller, seeking forward from today's month to the
    /// first month with an enabled day.
    pub fn build(self) -> Result<CalendarController, SettingsValidationError> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let mut controller = CalendarController::new(self.settings, today, self.disabled)?;
        controller.listener = self.listener;

        if let Some(value) = self.value {
            controller.set_value(&value);
        }
        Ok(controller)
    }
}
