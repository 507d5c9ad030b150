use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::weights::EnabledCategories;
use crate::error::ValidationError;
use crate::task::TaskCategory;

/// Which tasks the wheel may land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Every category, uniform draw.
    #[default]
    Normal,
    /// Work tasks only.
    HardWorking,
    /// Work and creative tasks, no leisure.
    TimeToWork,
    /// Enabled categories, drawn by category weight.
    Advanced,
}

impl SelectionMode {
    pub fn is_weighted(&self) -> bool {
        matches!(self, SelectionMode::Advanced)
    }

    /// Whether `category` may be drawn under this mode.
    pub fn allows(&self, category: TaskCategory, enabled: &EnabledCategories) -> bool {
        match self {
            SelectionMode::Normal => true,
            SelectionMode::HardWorking => category == TaskCategory::Work,
            SelectionMode::TimeToWork => category != TaskCategory::Leisure,
            SelectionMode::Advanced => enabled.is_enabled(category),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Normal => "normal",
            SelectionMode::HardWorking => "hard-working",
            SelectionMode::TimeToWork => "time-to-work",
            SelectionMode::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(SelectionMode::Normal),
            "hard-working" | "hard_working" => Ok(SelectionMode::HardWorking),
            "time-to-work" | "time_to_work" => Ok(SelectionMode::TimeToWork),
            "advanced" => Ok(SelectionMode::Advanced),
            other => Err(ValidationError::UnknownMode(other.to_string())),
        }
    }
}
