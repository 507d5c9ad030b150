use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::queue::PromoteOutcome;
use crate::session::SessionState;
use crate::task::{CompletedTask, Task};

/// Non-fatal conditions reported back to the caller as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    /// `start` with nothing queued.
    EmptyQueue,
    /// The command has no meaning in the current state.
    TransitionIgnored,
    /// Leisure pull found no leisure task to bring forward.
    NoLeisureTask,
}

/// Every state change in the session produces an Event.
/// Front ends render them; nothing inside the core reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SelectionCancelled {
        task_id: String,
        at: DateTime<Utc>,
    },
    TaskEnqueued {
        task: Task,
        position: usize,
        at: DateTime<Utc>,
    },
    TaskPromoted {
        task: Task,
        outcome: PromoteOutcome,
        at: DateTime<Utc>,
    },
    SessionStarted {
        task: Task,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionSkipped {
        task: Task,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    SessionCompleted {
        completed: CompletedTask,
        at: DateTime<Utc>,
    },
    /// The pool refused the completion; the session is paused for retry.
    CompletionFailed {
        task_id: String,
        message: String,
        at: DateTime<Utc>,
    },
    BreakStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    BreakFinished {
        at: DateTime<Utc>,
    },
    QueueCleared {
        removed: usize,
        at: DateTime<Utc>,
    },
    Warning {
        warning: Warning,
        state: SessionState,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: SessionState,
        current_task: Option<Task>,
        remaining_secs: u64,
        total_secs: u64,
        progress: f64,
        queue: Vec<Task>,
        pending: Option<Task>,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::Warning { .. })
    }
}
