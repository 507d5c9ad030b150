//! Progress statistics over the completion history.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::task::{CompletedTask, TaskCategory};

/// One counter per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub work: u64,
    pub leisure: u64,
    pub creative: u64,
}

impl CategoryCounts {
    pub fn get(&self, category: TaskCategory) -> u64 {
        match category {
            TaskCategory::Work => self.work,
            TaskCategory::Leisure => self.leisure,
            TaskCategory::Creative => self.creative,
        }
    }

    fn add(&mut self, category: TaskCategory, n: u64) {
        match category {
            TaskCategory::Work => self.work += n,
            TaskCategory::Leisure => self.leisure += n,
            TaskCategory::Creative => self.creative += n,
        }
    }

    pub fn total(&self) -> u64 {
        self.work + self.leisure + self.creative
    }
}

/// Dashboard totals.
///
/// Pomodoro counts sum each record's `completed_pomodoros` snapshot, so a task
/// finished three times contributes 1 + 2 + 3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_completed: u64,
    pub total_pomodoros: u64,
    pub pomodoros: CategoryCounts,
}

impl ProgressStats {
    pub fn from_completed(completed: &[CompletedTask]) -> Self {
        let mut stats = Self::default();
        for record in completed {
            let n = u64::from(record.task.completed_pomodoros);
            stats.total_completed += 1;
            stats.total_pomodoros += n;
            stats.pomodoros.add(record.task.category, n);
        }
        stats
    }
}

/// Completions on one calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: CategoryCounts,
}

impl DailyProgress {
    pub fn total(&self) -> u64 {
        self.counts.total()
    }
}

/// Longest window `daily_progress` will build.
pub const MAX_DAILY_WINDOW: u32 = 366;

/// Per-day completion counts for the `days` days ending at `today`, oldest
/// first. Days without completions are present with zero counts; each record
/// counts once. `days` is capped at [`MAX_DAILY_WINDOW`].
pub fn daily_progress(completed: &[CompletedTask], today: NaiveDate, days: u32) -> Vec<DailyProgress> {
    let days = days.min(MAX_DAILY_WINDOW);
    let mut out: Vec<DailyProgress> = (0..i64::from(days))
        .rev()
        .filter_map(|back| today.checked_sub_signed(Duration::days(back)))
        .map(|date| DailyProgress {
            date,
            counts: CategoryCounts::default(),
        })
        .collect();

    let Some(first) = out.first().map(|d| d.date) else {
        return out;
    };
    for record in completed {
        let date = record.completed_at.date_naive();
        if date < first || date > today {
            continue;
        }
        let idx = (date - first).num_days() as usize;
        if let Some(day) = out.get_mut(idx) {
            day.counts.add(record.task.category, 1);
        }
    }
    out
}

/// Whether any day in the series has a completion.
pub fn has_activity(days: &[DailyProgress]) -> bool {
    days.iter().any(|d| d.total() > 0)
}
