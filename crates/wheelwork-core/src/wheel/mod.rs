//! The wheel: eligibility, probability shares and weighted task selection.

mod mode;
pub mod selector;
pub mod weights;

pub use mode::SelectionMode;
pub use selector::{eligible_tasks, select, wheel_segments, WheelSegment};
pub use weights::{redistribute, toggle_category, CategoryWeights, EnabledCategories, TOTAL_WEIGHT};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::task::TaskCategory;

/// Mode plus the advanced-mode weights and inclusion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WheelSettings {
    #[serde(default)]
    pub mode: SelectionMode,
    #[serde(default)]
    pub weights: CategoryWeights,
    #[serde(default)]
    pub enabled: EnabledCategories,
}

impl WheelSettings {
    /// Update one category weight, keeping the total at 100.
    ///
    /// # Errors
    /// Rejects values above 100.
    pub fn set_weight(&mut self, category: TaskCategory, value: u32) -> Result<(), ValidationError> {
        if value > TOTAL_WEIGHT {
            return Err(ValidationError::WeightOutOfRange(value));
        }
        self.weights = redistribute(&self.weights, category, value, &self.enabled);
        Ok(())
    }

    /// Include or exclude a category from advanced mode.
    ///
    /// # Errors
    /// Rejects disabling the last enabled category.
    pub fn set_enabled(&mut self, category: TaskCategory, on: bool) -> Result<(), ValidationError> {
        let (weights, enabled) = toggle_category(&self.weights, &self.enabled, category, on)?;
        self.weights = weights;
        self.enabled = enabled;
        Ok(())
    }

    /// Force the weight invariant on settings read from disk.
    pub fn corrected(mut self) -> Self {
        if self.enabled.count() == 0 {
            self.enabled = EnabledCategories::default();
        }
        self.weights = self.weights.corrected(&self.enabled);
        self
    }
}
