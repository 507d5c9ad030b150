//! Task pool capability.
//!
//! The session engine never owns tasks. It reads a snapshot of the pool for
//! each wheel spin and calls back into the pool when a focus session ends.
//! [`crate::storage::TaskStore`] is the SQLite implementation; [`MemoryPool`]
//! keeps everything in memory and can be switched offline to exercise the
//! failed-completion path.

use chrono::Utc;
use tracing::warn;

use crate::error::SyncError;
use crate::task::{CompletedTask, NewTask, Task};

/// Every task source implements this trait.
pub trait TaskPool {
    /// Current selectable tasks.
    fn tasks(&self) -> Result<Vec<Task>, SyncError>;

    /// Completion history, oldest first.
    fn completed_tasks(&self) -> Result<Vec<CompletedTask>, SyncError>;

    /// Bump the task's completion count and append a history record.
    ///
    /// Nothing is recorded when this fails.
    fn record_completion(&mut self, task_id: &str) -> Result<CompletedTask, SyncError>;

    /// Validate and add a task.
    fn create_task(&mut self, new_task: NewTask) -> Result<Task, SyncError>;

    /// Remove a task. Returns `false` when it did not exist.
    fn delete_task(&mut self, task_id: &str) -> Result<bool, SyncError>;
}

/// In-memory pool.
#[derive(Debug, Clone, Default)]
pub struct MemoryPool {
    tasks: Vec<Task>,
    completed: Vec<CompletedTask>,
    offline: bool,
}

impl MemoryPool {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            completed: Vec::new(),
            offline: false,
        }
    }

    /// While offline every mutation fails with [`SyncError::Storage`].
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    fn ensure_online(&self) -> Result<(), SyncError> {
        if self.offline {
            warn!("task pool is offline");
            return Err(SyncError::Storage("task pool is offline".into()));
        }
        Ok(())
    }
}

impl TaskPool for MemoryPool {
    fn tasks(&self) -> Result<Vec<Task>, SyncError> {
        Ok(self.tasks.clone())
    }

    fn completed_tasks(&self) -> Result<Vec<CompletedTask>, SyncError> {
        Ok(self.completed.clone())
    }

    fn record_completion(&mut self, task_id: &str) -> Result<CompletedTask, SyncError> {
        self.ensure_online()?;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| SyncError::TaskNotFound(task_id.to_string()))?;
        task.completed_pomodoros += 1;
        let record = CompletedTask::new(task.clone(), Utc::now());
        self.completed.push(record.clone());
        Ok(record)
    }

    fn create_task(&mut self, new_task: NewTask) -> Result<Task, SyncError> {
        self.ensure_online()?;
        let task = new_task.validated()?.into_task();
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn delete_task(&mut self, task_id: &str) -> Result<bool, SyncError> {
        self.ensure_online()?;
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        Ok(self.tasks.len() != before)
    }
}
