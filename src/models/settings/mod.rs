// Settings module
// Picker configuration supplied by the host

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::selection::SelectionMode;

/// Upper bound for the month-seek budget.
pub const MAX_RESEARCH_RANGE_MONTH: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub mode: SelectionMode,
    /// Months to search forward when the starting month is fully disabled.
    pub research_range_month: u32,
    /// Label of the "jump to today" action.
    pub today_text: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            research_range_month: 6,
            today_text: "Today".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("research_range_month must be 120 or less, got {0}")]
    ResearchRangeTooLarge(u32),
    #[error("today_text cannot be empty")]
    EmptyTodayText,
}

impl PickerSettings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.research_range_month > MAX_RESEARCH_RANGE_MONTH {
            return Err(SettingsValidationError::ResearchRangeTooLarge(
                self.research_range_month,
            ));
        }
        if self.today_text.trim().is_empty() {
            return Err(SettingsValidationError::EmptyTodayText);
        }
        Ok(())
    }
}
