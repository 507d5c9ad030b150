//! Task model shared by the pool, the wheel and the session engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Category every task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Work,
    Leisure,
    Creative,
}

impl TaskCategory {
    /// Fixed iteration order, also the order of wheel segments.
    pub const ALL: [TaskCategory; 3] = [
        TaskCategory::Work,
        TaskCategory::Leisure,
        TaskCategory::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Work => "work",
            TaskCategory::Leisure => "leisure",
            TaskCategory::Creative => "creative",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(TaskCategory::Work),
            "leisure" => Ok(TaskCategory::Leisure),
            "creative" => Ok(TaskCategory::Creative),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

/// A selectable task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub category: TaskCategory,
    #[serde(default)]
    pub completed_pomodoros: u32,
    /// Custom focus duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            completed_pomodoros: 0,
            duration: None,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn with_completed(mut self, completed_pomodoros: u32) -> Self {
        self.completed_pomodoros = completed_pomodoros;
        self
    }

    /// Focus length for this task, falling back to `default_secs`.
    pub fn focus_secs(&self, default_secs: u64) -> u64 {
        match self.duration {
            Some(min) if min > 0 => u64::from(min).saturating_mul(60),
            _ => default_secs,
        }
    }
}

/// Snapshot of a task at the moment its focus session finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    #[serde(flatten)]
    pub task: Task,
    pub completed_at: DateTime<Utc>,
}

impl CompletedTask {
    pub fn new(task: Task, completed_at: DateTime<Utc>) -> Self {
        Self { task, completed_at }
    }
}

/// Input for creating a task through a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub category: TaskCategory,
    #[serde(default)]
    pub duration: Option<u32>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            title: title.into(),
            category,
            duration: None,
        }
    }

    /// Trim the title and reject blank titles or zero durations.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if let Some(0) = self.duration {
            return Err(ValidationError::InvalidDuration(0));
        }
        Ok(Self { title, ..self })
    }

    /// Materialize into a task with a fresh id.
    pub fn into_task(self) -> Task {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title,
            category: self.category,
            completed_pomodoros: 0,
            duration: self.duration,
        }
    }
}

/// Starter pool written into a fresh store.
pub fn starter_tasks() -> Vec<Task> {
    vec![
        Task::new("task-1", "Build the UI", TaskCategory::Work).with_completed(1),
        Task::new("task-2", "Read a book", TaskCategory::Leisure),
        Task::new("task-3", "Sketch an idea", TaskCategory::Creative).with_completed(2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Work".parse::<TaskCategory>().unwrap(), TaskCategory::Work);
        assert_eq!(" leisure ".parse::<TaskCategory>().unwrap(), TaskCategory::Leisure);
        assert!(matches!(
            "chores".parse::<TaskCategory>(),
            Err(ValidationError::UnknownCategory(_))
        ));
    }

    #[test]
    fn focus_secs_prefers_custom_duration() {
        let plain = Task::new("a", "A", TaskCategory::Work);
        assert_eq!(plain.focus_secs(1500), 1500);
        let custom = plain.with_duration(10);
        assert_eq!(custom.focus_secs(1500), 600);
    }

    #[test]
    fn new_task_validation_trims_and_rejects() {
        let ok = NewTask::new("  Write report ", TaskCategory::Work).validated().unwrap();
        assert_eq!(ok.title, "Write report");

        assert_eq!(
            NewTask::new("   ", TaskCategory::Work).validated(),
            Err(ValidationError::EmptyTitle)
        );

        let mut zero = NewTask::new("Nap", TaskCategory::Leisure);
        zero.duration = Some(0);
        assert_eq!(zero.validated(), Err(ValidationError::InvalidDuration(0)));
    }

    #[test]
    fn completed_task_serializes_flat() {
        let done = CompletedTask::new(Task::new("t", "T", TaskCategory::Creative), Utc::now());
        let json = serde_json::to_value(&done).unwrap();
        assert_eq!(json["id"], "t");
        assert_eq!(json["category"], "creative");
        assert!(json.get("completed_at").is_some());
    }
}
