//! Category weights for the advanced wheel mode.
//!
//! Weights are integer percentages that always sum to exactly 100. A change
//! to one category hands the remainder to the other enabled categories in
//! proportion to what they held before (equal split when they held nothing),
//! then a correction pass puts any rounding leftover on one designated
//! category so the total is exact.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::task::TaskCategory;

pub const TOTAL_WEIGHT: u32 = 100;

/// Percentage share per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWeights {
    #[serde(default)]
    pub work: u32,
    #[serde(default)]
    pub leisure: u32,
    #[serde(default)]
    pub creative: u32,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            work: 40,
            leisure: 20,
            creative: 40,
        }
    }
}

impl CategoryWeights {
    pub fn new(work: u32, leisure: u32, creative: u32) -> Self {
        Self {
            work,
            leisure,
            creative,
        }
    }

    pub fn get(&self, category: TaskCategory) -> u32 {
        match category {
            TaskCategory::Work => self.work,
            TaskCategory::Leisure => self.leisure,
            TaskCategory::Creative => self.creative,
        }
    }

    fn slot(&mut self, category: TaskCategory) -> &mut u32 {
        match category {
            TaskCategory::Work => &mut self.work,
            TaskCategory::Leisure => &mut self.leisure,
            TaskCategory::Creative => &mut self.creative,
        }
    }

    /// Saturating sum of the three weights.
    pub fn total(&self) -> u32 {
        self.work.saturating_add(self.leisure).saturating_add(self.creative)
    }

    fn clamped(self) -> Self {
        Self::new(
            self.work.min(TOTAL_WEIGHT),
            self.leisure.min(TOTAL_WEIGHT),
            self.creative.min(TOTAL_WEIGHT),
        )
    }

    /// Sums to 100 and gives nothing to disabled categories.
    pub fn is_valid(&self, enabled: &EnabledCategories) -> bool {
        self.total() == TOTAL_WEIGHT
            && TaskCategory::ALL
                .iter()
                .all(|c| enabled.is_enabled(*c) || self.get(*c) == 0)
    }

    /// Repair weights loaded from disk.
    ///
    /// Every value is first capped at 100. The first enabled category then
    /// keeps its value and the rest is spread over the others.
    pub fn corrected(self, enabled: &EnabledCategories) -> Self {
        let capped = self.clamped();
        if capped.is_valid(enabled) {
            return capped;
        }
        match enabled.iter().next() {
            Some(anchor) => redistribute(&capped, anchor, capped.get(anchor), enabled),
            None => CategoryWeights::default(),
        }
    }
}

/// Advanced-mode inclusion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledCategories {
    #[serde(default = "default_true")]
    pub work: bool,
    #[serde(default = "default_true")]
    pub leisure: bool,
    #[serde(default = "default_true")]
    pub creative: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EnabledCategories {
    fn default() -> Self {
        Self {
            work: true,
            leisure: true,
            creative: true,
        }
    }
}

impl EnabledCategories {
    pub fn is_enabled(&self, category: TaskCategory) -> bool {
        match category {
            TaskCategory::Work => self.work,
            TaskCategory::Leisure => self.leisure,
            TaskCategory::Creative => self.creative,
        }
    }

    pub fn set(&mut self, category: TaskCategory, on: bool) {
        match category {
            TaskCategory::Work => self.work = on,
            TaskCategory::Leisure => self.leisure = on,
            TaskCategory::Creative => self.creative = on,
        }
    }

    /// Enabled categories in wheel order.
    pub fn iter(&self) -> impl Iterator<Item = TaskCategory> + '_ {
        TaskCategory::ALL
            .into_iter()
            .filter(move |c| self.is_enabled(*c))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// Set `changed` to `new_value` and rebalance the other enabled categories.
///
/// Values above 100 are capped. A disabled `changed` category is forced to 0.
/// Disabled categories always end at 0. The last enabled category other than
/// `changed` absorbs the rounding remainder; when there is none, `changed`
/// takes the full 100.
pub fn redistribute(
    weights: &CategoryWeights,
    changed: TaskCategory,
    new_value: u32,
    enabled: &EnabledCategories,
) -> CategoryWeights {
    let others: Vec<TaskCategory> = enabled.iter().filter(|c| *c != changed).collect();

    let mut next = CategoryWeights::new(0, 0, 0);
    if others.is_empty() {
        *next.slot(changed) = TOTAL_WEIGHT;
        return next;
    }

    let value = if enabled.is_enabled(changed) {
        new_value.min(TOTAL_WEIGHT)
    } else {
        0
    };
    *next.slot(changed) = value;

    let remaining = TOTAL_WEIGHT - value;
    let prior_total: u64 = others.iter().map(|c| u64::from(weights.get(*c))).sum();
    for category in &others {
        let share = if prior_total > 0 {
            // u64 to keep remaining * prior clear of overflow on junk input
            (u64::from(remaining) * u64::from(weights.get(*category)) / prior_total) as u32
        } else {
            remaining / others.len() as u32
        };
        *next.slot(*category) = share;
    }

    // Floor division only ever leaves a non-negative remainder.
    let leftover = TOTAL_WEIGHT.saturating_sub(next.total());
    if let Some(designated) = others.last() {
        *next.slot(*designated) += leftover;
    }

    debug!(
        category = %changed,
        value,
        work = next.work,
        leisure = next.leisure,
        creative = next.creative,
        "redistributed wheel weights"
    );
    next
}

/// Turn a category on or off, rebalancing weights.
///
/// A newly enabled category starts at an equal share of the enabled set.
///
/// # Errors
/// Returns [`ValidationError::NoCategoryEnabled`] when disabling the last
/// enabled category.
pub fn toggle_category(
    weights: &CategoryWeights,
    enabled: &EnabledCategories,
    category: TaskCategory,
    on: bool,
) -> Result<(CategoryWeights, EnabledCategories), ValidationError> {
    let mut next_enabled = *enabled;
    next_enabled.set(category, on);
    if next_enabled.count() == 0 {
        return Err(ValidationError::NoCategoryEnabled);
    }
    if next_enabled == *enabled {
        return Ok((weights.corrected(enabled), *enabled));
    }

    let value = if on {
        TOTAL_WEIGHT / next_enabled.count() as u32
    } else {
        0
    };
    Ok((redistribute(weights, category, value, &next_enabled), next_enabled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn leisure_to_fifty_splits_rest_evenly() {
        let weights = CategoryWeights::new(40, 20, 40);
        let next = redistribute(&weights, TaskCategory::Leisure, 50, &EnabledCategories::default());
        assert_eq!(next, CategoryWeights::new(25, 50, 25));
    }

    #[test]
    fn proportional_split_keeps_ratio() {
        let weights = CategoryWeights::new(60, 10, 30);
        let next = redistribute(&weights, TaskCategory::Leisure, 40, &EnabledCategories::default());
        // 60 remaining split 60:30
        assert_eq!(next, CategoryWeights::new(40, 40, 20));
    }

    #[test]
    fn zero_prior_total_splits_equally() {
        let weights = CategoryWeights::new(0, 100, 0);
        let next = redistribute(&weights, TaskCategory::Leisure, 30, &EnabledCategories::default());
        assert_eq!(next, CategoryWeights::new(35, 30, 35));
    }

    #[test]
    fn rounding_leftover_goes_to_last_other_category() {
        let weights = CategoryWeights::new(33, 33, 34);
        let next = redistribute(&weights, TaskCategory::Work, 1, &EnabledCategories::default());
        // 99 over 33:34 floors to 48 + 50 = 98, creative takes the extra 1
        assert_eq!(next, CategoryWeights::new(1, 48, 51));
        assert_eq!(next.total(), 100);
    }

    #[test]
    fn disabled_categories_get_nothing() {
        let mut enabled = EnabledCategories::default();
        enabled.creative = false;
        let weights = CategoryWeights::new(40, 20, 40);
        let next = redistribute(&weights, TaskCategory::Work, 70, &enabled);
        assert_eq!(next, CategoryWeights::new(70, 30, 0));
    }

    #[test]
    fn sole_enabled_category_takes_everything() {
        let mut enabled = EnabledCategories::default();
        enabled.leisure = false;
        enabled.creative = false;
        let next = redistribute(&CategoryWeights::default(), TaskCategory::Work, 10, &enabled);
        assert_eq!(next, CategoryWeights::new(100, 0, 0));
    }

    #[test]
    fn values_above_hundred_are_capped() {
        let next = redistribute(
            &CategoryWeights::default(),
            TaskCategory::Creative,
            250,
            &EnabledCategories::default(),
        );
        assert_eq!(next, CategoryWeights::new(0, 0, 100));
    }

    #[test]
    fn toggle_off_hands_share_to_others() {
        let (weights, enabled) = toggle_category(
            &CategoryWeights::new(40, 20, 40),
            &EnabledCategories::default(),
            TaskCategory::Leisure,
            false,
        )
        .unwrap();
        assert!(!enabled.leisure);
        assert_eq!(weights, CategoryWeights::new(50, 0, 50));
    }

    #[test]
    fn toggle_on_takes_equal_share() {
        let mut enabled = EnabledCategories::default();
        enabled.leisure = false;
        let (weights, enabled) =
            toggle_category(&CategoryWeights::new(50, 0, 50), &enabled, TaskCategory::Leisure, true)
                .unwrap();
        assert!(enabled.leisure);
        assert_eq!(weights, CategoryWeights::new(33, 33, 34));
    }

    #[test]
    fn cannot_disable_last_category() {
        let mut enabled = EnabledCategories::default();
        enabled.leisure = false;
        enabled.creative = false;
        let result = toggle_category(
            &CategoryWeights::new(100, 0, 0),
            &enabled,
            TaskCategory::Work,
            false,
        );
        assert_eq!(result, Err(ValidationError::NoCategoryEnabled));
    }

    #[test]
    fn corrected_caps_oversized_values_without_overflow() {
        let junk = CategoryWeights::new(u32::MAX, 1, 0);
        assert_eq!(junk.total(), u32::MAX);
        let fixed = junk.corrected(&EnabledCategories::default());
        assert_eq!(fixed, CategoryWeights::new(100, 0, 0));

        // Would sum to exactly 100 if the addition wrapped.
        let wrapping = CategoryWeights::new(u32::MAX, 101, 0);
        assert!(!wrapping.is_valid(&EnabledCategories::default()));
        assert_eq!(wrapping.corrected(&EnabledCategories::default()).total(), 100);
    }

    #[test]
    fn corrected_repairs_bad_totals() {
        let fixed = CategoryWeights::new(50, 50, 50).corrected(&EnabledCategories::default());
        assert_eq!(fixed, CategoryWeights::new(50, 25, 25));
        assert!(fixed.is_valid(&EnabledCategories::default()));
    }

    fn any_category() -> impl Strategy<Value = TaskCategory> {
        prop_oneof![
            Just(TaskCategory::Work),
            Just(TaskCategory::Leisure),
            Just(TaskCategory::Creative),
        ]
    }

    fn any_enabled() -> impl Strategy<Value = EnabledCategories> {
        (any::<bool>(), any::<bool>(), any::<bool>())
            .prop_filter("at least one enabled", |(w, l, c)| *w || *l || *c)
            .prop_map(|(work, leisure, creative)| EnabledCategories {
                work,
                leisure,
                creative,
            })
    }

    proptest! {
        #[test]
        fn redistribution_always_sums_to_hundred(
            work in 0u32..=100,
            leisure in 0u32..=100,
            creative in 0u32..=100,
            changed in any_category(),
            value in 0u32..=150,
            enabled in any_enabled(),
        ) {
            let weights = CategoryWeights::new(work, leisure, creative);
            let next = redistribute(&weights, changed, value, &enabled);
            prop_assert_eq!(next.total(), TOTAL_WEIGHT);
            prop_assert!(next.is_valid(&enabled));
        }

        #[test]
        fn chained_updates_stay_valid(
            updates in proptest::collection::vec((any_category(), 0u32..=100), 1..20),
        ) {
            let enabled = EnabledCategories::default();
            let mut weights = CategoryWeights::default();
            for (category, value) in updates {
                weights = redistribute(&weights, category, value, &enabled);
                prop_assert_eq!(weights.total(), TOTAL_WEIGHT);
                prop_assert_eq!(weights.get(category), value);
            }
        }
    }
}
