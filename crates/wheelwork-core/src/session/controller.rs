//! Session controller.
//!
//! One `Session` exists per signed-in user. It owns the countdown, the task
//! queue, the pending wheel result and the interval registration; the task
//! pool stays outside and is passed in by the caller. Every method takes
//! `&mut self`, so session-advancing events are serialized and a completion
//! call finishes before anything else can touch the session.
//!
//! Commands return the events they produced, in order. A command that
//! chains into another (skip then start, break end then start) returns both.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::interval::{IntervalId, IntervalSlot};
use super::timer::{FocusTimer, TickOutcome};
use super::{Durations, SessionState};
use crate::error::{SelectionError, ValidationError};
use crate::events::{Event, Warning};
use crate::pool::TaskPool;
use crate::queue::TaskQueue;
use crate::task::{Task, TaskCategory};
use crate::wheel::{self, SelectionMode, WheelSegment, WheelSettings};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    timer: FocusTimer,
    queue: TaskQueue,
    /// Queue head while a focus session is running or paused.
    #[serde(default)]
    current: Option<Task>,
    /// Wheel result awaiting confirmation.
    #[serde(default)]
    pending: Option<Task>,
    #[serde(default)]
    wheel: WheelSettings,
    #[serde(default)]
    interval: IntervalSlot,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(WheelSettings::default(), Durations::default())
    }
}

impl Session {
    pub fn new(wheel: WheelSettings, durations: Durations) -> Self {
        Self {
            timer: FocusTimer::new(durations),
            queue: TaskQueue::new(),
            current: None,
            pending: None,
            wheel: wheel.corrected(),
            interval: IntervalSlot::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.timer.state()
    }

    pub fn remaining_secs(&self) -> u64 {
        self.timer.remaining_secs()
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.current.as_ref()
    }

    pub fn queue(&self) -> &TaskQueue {
        &self.queue
    }

    pub fn pending(&self) -> Option<&Task> {
        self.pending.as_ref()
    }

    pub fn wheel(&self) -> &WheelSettings {
        &self.wheel
    }

    pub fn durations(&self) -> Durations {
        self.timer.durations()
    }

    /// The live interval registration, if the countdown is moving.
    pub fn interval(&self) -> Option<IntervalId> {
        self.interval.active()
    }

    /// Tasks the wheel currently shows.
    pub fn eligible(&self, pool: &[Task]) -> Vec<Task> {
        wheel::eligible_tasks(pool, &self.queue, &self.wheel)
    }

    pub fn segments(&self, pool: &[Task]) -> Vec<WheelSegment> {
        wheel::wheel_segments(pool, &self.queue, &self.wheel)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state(),
            current_task: self.current.clone(),
            remaining_secs: self.timer.remaining_secs(),
            total_secs: self.timer.total_secs(),
            progress: self.timer.progress(),
            queue: self.queue.iter().cloned().collect(),
            pending: self.pending.clone(),
            at: Utc::now(),
        }
    }

    // ── Wheel settings ───────────────────────────────────────────────

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.wheel.mode = mode;
    }

    pub fn set_weight(&mut self, category: TaskCategory, value: u32) -> Result<(), ValidationError> {
        self.wheel.set_weight(category, value)
    }

    pub fn set_category_enabled(&mut self, category: TaskCategory, on: bool) -> Result<(), ValidationError> {
        self.wheel.set_enabled(category, on)
    }

    pub fn set_wheel(&mut self, wheel: WheelSettings) {
        self.wheel = wheel.corrected();
    }

    pub fn set_durations(&mut self, durations: Durations) {
        self.timer.set_durations(durations);
    }

    // ── Wheel ────────────────────────────────────────────────────────

    /// Draw a task and hold it until [`Session::confirm`] or
    /// [`Session::cancel_selection`].
    ///
    /// # Errors
    /// `SelectionPending` while an earlier result is unconfirmed,
    /// `NoEligibleTasks` when the wheel is empty. Neither changes state.
    pub fn spin<R: Rng + ?Sized>(&mut self, pool: &[Task], rng: &mut R) -> Result<Task, SelectionError> {
        if let Some(pending) = &self.pending {
            warn!(task_id = %pending.id, "spin rejected: selection pending");
            return Err(SelectionError::SelectionPending);
        }
        let chosen = wheel::select(pool, &self.queue, None, &self.wheel, rng).ok_or_else(|| {
            warn!(mode = %self.wheel.mode, "spin found no eligible tasks");
            SelectionError::NoEligibleTasks
        })?;
        self.pending = Some(chosen.clone());
        Ok(chosen)
    }

    /// Queue the pending result, starting it when the session is idle.
    pub fn confirm(&mut self) -> Result<Vec<Event>, SelectionError> {
        let task = self.pending.take().ok_or(SelectionError::NothingPending)?;
        self.queue.enqueue(task.clone());
        info!(task_id = %task.id, queued = self.queue.len(), "task queued");
        let mut events = vec![Event::TaskEnqueued {
            task,
            position: self.queue.len() - 1,
            at: Utc::now(),
        }];
        events.extend(self.auto_start());
        Ok(events)
    }

    /// Drop the pending result without queueing it.
    pub fn cancel_selection(&mut self) -> Result<Event, SelectionError> {
        let task = self.pending.take().ok_or(SelectionError::NothingPending)?;
        Ok(Event::SelectionCancelled {
            task_id: task.id,
            at: Utc::now(),
        })
    }

    // ── Queue ────────────────────────────────────────────────────────

    /// Bring a leisure task to the front of the queue.
    ///
    /// Prefers a leisure task already queued, else the first unqueued one
    /// from `pool`. While a focus session is in progress the front is the
    /// slot behind the current task, which stays where it is.
    pub fn promote_leisure(&mut self, pool: &[Task]) -> Vec<Event> {
        let slot = usize::from(self.current.is_some());
        let candidate = self
            .queue
            .find_category_from(TaskCategory::Leisure, slot)
            .cloned()
            .or_else(|| {
                pool.iter()
                    .find(|t| t.category == TaskCategory::Leisure && !self.queue.contains(&t.id))
                    .cloned()
            });

        let Some(task) = candidate else {
            warn!("leisure pull found no leisure task");
            return vec![self.warning(Warning::NoLeisureTask)];
        };

        let outcome = self.queue.promote_to(task.clone(), slot);
        info!(task_id = %task.id, ?outcome, "leisure task promoted");
        let mut events = vec![Event::TaskPromoted {
            task,
            outcome,
            at: Utc::now(),
        }];
        events.extend(self.auto_start());
        events
    }

    /// Drop queued copies of a task that left the pool.
    ///
    /// The task in session is kept; it fails or completes on its own.
    pub fn forget_task(&mut self, task_id: &str) -> usize {
        if self.pending.as_ref().map(|t| t.id == task_id).unwrap_or(false) {
            self.pending = None;
        }
        let from = usize::from(self.current.is_some());
        self.queue.remove_task_from(task_id, from)
    }

    /// Empty the queue and return to idle.
    pub fn clear_queue(&mut self) -> Vec<Event> {
        let removed = self.queue.len();
        self.queue.clear();
        self.current = None;
        self.interval.cancel();
        self.timer.reset();
        info!(removed, "queue cleared");
        vec![Event::QueueCleared {
            removed,
            at: Utc::now(),
        }]
    }

    // ── Timer commands ───────────────────────────────────────────────

    pub fn start(&mut self) -> Vec<Event> {
        match self.state() {
            SessionState::Idle => {
                let Some(head) = self.queue.head().cloned() else {
                    warn!("start with an empty queue");
                    return vec![self.warning(Warning::EmptyQueue)];
                };
                let duration_secs = head.focus_secs(self.timer.durations().focus_secs);
                self.timer.begin_focus(duration_secs);
                self.interval.arm();
                self.current = Some(head.clone());
                info!(task_id = %head.id, duration_secs, "focus session started");
                vec![Event::SessionStarted {
                    task: head,
                    duration_secs,
                    at: Utc::now(),
                }]
            }
            SessionState::Paused => {
                self.timer.resume();
                self.interval.arm();
                debug!(remaining = self.timer.remaining_secs(), "focus session resumed");
                vec![Event::SessionResumed {
                    remaining_secs: self.timer.remaining_secs(),
                    at: Utc::now(),
                }]
            }
            SessionState::Running => Vec::new(), // Already running.
            SessionState::Break => vec![self.warning(Warning::TransitionIgnored)],
        }
    }

    pub fn pause(&mut self) -> Vec<Event> {
        match self.state() {
            SessionState::Running => {
                self.timer.freeze();
                self.interval.cancel();
                vec![Event::SessionPaused {
                    remaining_secs: self.timer.remaining_secs(),
                    at: Utc::now(),
                }]
            }
            SessionState::Paused => Vec::new(),
            SessionState::Idle | SessionState::Break => vec![self.warning(Warning::TransitionIgnored)],
        }
    }

    /// Back to idle with the default focus length. Leaves the queue alone and
    /// does not start the next task.
    pub fn reset(&mut self) -> Vec<Event> {
        self.interval.cancel();
        self.current = None;
        self.timer.reset();
        info!("session reset");
        vec![Event::SessionReset { at: Utc::now() }]
    }

    /// Abandon the current task without recording a completion.
    pub fn skip(&mut self) -> Vec<Event> {
        if !matches!(self.state(), SessionState::Running | SessionState::Paused) {
            return vec![self.warning(Warning::TransitionIgnored)];
        }
        self.interval.cancel();
        let skipped = self.queue.dequeue_head().or_else(|| self.current.clone());
        self.current = None;
        self.timer.reset();

        let mut events = Vec::new();
        if let Some(task) = skipped {
            info!(task_id = %task.id, "focus session skipped");
            events.push(Event::SessionSkipped {
                task,
                at: Utc::now(),
            });
        }
        events.extend(self.auto_start());
        events
    }

    /// Deliver one second from interval `interval`.
    ///
    /// Ticks from a cancelled or replaced registration are dropped. When the
    /// focus countdown reaches zero the completion goes through `pool` before
    /// the session moves on: success starts the break, failure pauses the
    /// session with the task still at the head of the queue.
    pub fn tick(&mut self, interval: IntervalId, pool: &mut dyn TaskPool) -> Vec<Event> {
        if !self.interval.accepts(interval) {
            debug!(interval = interval.get(), "dropped tick from stale interval");
            return Vec::new();
        }
        match self.timer.tick() {
            TickOutcome::Ignored | TickOutcome::Counting => Vec::new(),
            TickOutcome::FocusElapsed => self.complete_focus(pool),
            TickOutcome::BreakElapsed => {
                self.interval.cancel();
                self.timer.reset();
                info!("break finished");
                let mut events = vec![Event::BreakFinished { at: Utc::now() }];
                events.extend(self.auto_start());
                events
            }
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete_focus(&mut self, pool: &mut dyn TaskPool) -> Vec<Event> {
        let Some(task) = self.current.clone().or_else(|| self.queue.head().cloned()) else {
            // Nothing to credit; treat as a plain reset.
            self.interval.cancel();
            self.timer.reset();
            return Vec::new();
        };

        match pool.record_completion(&task.id) {
            Ok(completed) => {
                self.queue.dequeue_head();
                self.current = None;
                self.timer.begin_break();
                self.interval.arm();
                let duration_secs = self.timer.remaining_secs();
                info!(task_id = %task.id, break_secs = duration_secs, "focus session completed");
                vec![
                    Event::SessionCompleted {
                        completed,
                        at: Utc::now(),
                    },
                    Event::BreakStarted {
                        duration_secs,
                        at: Utc::now(),
                    },
                ]
            }
            Err(e) => {
                self.timer.freeze();
                self.interval.cancel();
                warn!(task_id = %task.id, error = %e, "completion failed, session paused");
                vec![Event::CompletionFailed {
                    task_id: task.id,
                    message: e.to_string(),
                    at: Utc::now(),
                }]
            }
        }
    }

    /// Start the head when idle with something queued.
    fn auto_start(&mut self) -> Vec<Event> {
        if self.state() == SessionState::Idle && !self.queue.is_empty() {
            self.start()
        } else {
            Vec::new()
        }
    }

    fn warning(&self, warning: Warning) -> Event {
        Event::Warning {
            warning,
            state: self.state(),
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::MemoryPool;
    use crate::task::CompletedTask;

    fn work(id: &str) -> Task {
        Task::new(id, id.to_uppercase(), TaskCategory::Work)
    }

    fn leisure(id: &str) -> Task {
        Task::new(id, id.to_uppercase(), TaskCategory::Leisure)
    }

    /// Queue tasks directly, bypassing the wheel.
    fn session_with(tasks: &[Task]) -> Session {
        let mut session = Session::default();
        for task in tasks {
            session.pending = Some(task.clone());
            session.confirm().unwrap();
        }
        session
    }

    fn tick_n(session: &mut Session, pool: &mut MemoryPool, n: u64) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..n {
            if let Some(id) = session.interval() {
                events.extend(session.tick(id, pool));
            }
        }
        events
    }

    #[test]
    fn confirm_auto_starts_idle_session() {
        let session = session_with(&[work("a")]);
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.current_task().unwrap().id, "a");
        assert_eq!(session.remaining_secs(), 1500);
        assert!(session.interval().is_some());
    }

    #[test]
    fn custom_duration_sets_timer() {
        let session = session_with(&[work("a").with_duration(10)]);
        assert_eq!(session.remaining_secs(), 600);
    }

    #[test]
    fn start_twice_is_idempotent() {
        let mut session = session_with(&[work("a")]);
        let interval = session.interval();
        assert!(session.start().is_empty());
        assert_eq!(session.interval(), interval);
    }

    #[test]
    fn start_on_empty_queue_warns() {
        let mut session = Session::default();
        let events = session.start();
        assert!(matches!(
            events.as_slice(),
            [Event::Warning {
                warning: Warning::EmptyQueue,
                ..
            }]
        ));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn pause_cancels_interval_and_resume_rearms() {
        let mut pool = MemoryPool::new(vec![work("a")]);
        let mut session = session_with(&[work("a")]);
        let first = session.interval().unwrap();
        tick_n(&mut session, &mut pool, 100);
        session.pause();
        assert_eq!(session.state(), SessionState::Paused);
        assert!(session.interval().is_none());
        assert!(session.tick(first, &mut pool).is_empty());
        assert_eq!(session.remaining_secs(), 1400);

        session.start();
        let second = session.interval().unwrap();
        assert_ne!(first, second);
        assert_eq!(session.remaining_secs(), 1400);
    }

    #[test]
    fn stale_interval_ticks_are_dropped() {
        let mut pool = MemoryPool::new(vec![work("a")]);
        let mut session = session_with(&[work("a")]);
        let old = session.interval().unwrap();
        session.pause();
        session.start();
        session.tick(old, &mut pool);
        assert_eq!(session.remaining_secs(), 1500);
    }

    #[test]
    fn completion_moves_to_break_and_records() {
        let mut pool = MemoryPool::new(vec![work("a")]);
        let mut session = session_with(&[work("a").with_duration(1)]);
        let events = tick_n(&mut session, &mut pool, 60);
        assert!(events.iter().any(|e| matches!(e, Event::SessionCompleted { .. })));
        assert_eq!(session.state(), SessionState::Break);
        assert_eq!(session.remaining_secs(), 300);
        assert!(session.queue().is_empty());
        assert!(session.current_task().is_none());
        assert_eq!(pool.task("a").unwrap().completed_pomodoros, 1);
    }

    #[test]
    fn break_end_starts_next_task() {
        let mut pool = MemoryPool::new(vec![work("a"), work("b")]);
        let mut session = session_with(&[work("a").with_duration(1), work("b")]);
        tick_n(&mut session, &mut pool, 60 + 300);
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.current_task().unwrap().id, "b");
        assert_eq!(session.remaining_secs(), 1500);
    }

    #[test]
    fn failed_completion_pauses_with_head_kept() {
        let mut pool = MemoryPool::new(vec![work("a")]);
        pool.set_offline(true);
        let mut session = session_with(&[work("a").with_duration(1)]);
        let events = tick_n(&mut session, &mut pool, 60);
        assert!(matches!(events.last(), Some(Event::CompletionFailed { .. })));
        assert_eq!(session.state(), SessionState::Paused);
        assert_eq!(session.queue().head().unwrap().id, "a");
        assert_eq!(session.current_task().unwrap().id, "a");
        assert!(session.interval().is_none());
        let history: Vec<CompletedTask> = pool.completed_tasks().unwrap();
        assert!(history.is_empty());

        // Retry: start, then the next tick re-attempts the completion.
        pool.set_offline(false);
        session.start();
        let events = tick_n(&mut session, &mut pool, 1);
        assert!(events.iter().any(|e| matches!(e, Event::SessionCompleted { .. })));
        assert_eq!(session.state(), SessionState::Break);
    }

    #[test]
    fn skip_removes_head_without_completion() {
        let pool = MemoryPool::new(vec![work("a"), work("b")]);
        let mut session = session_with(&[work("a"), work("b")]);
        let events = session.skip();
        assert!(matches!(events.first(), Some(Event::SessionSkipped { task, .. }) if task.id == "a"));
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.current_task().unwrap().id, "b");
        assert_eq!(session.queue().len(), 1);
        assert!(pool.completed_tasks().unwrap().is_empty());
    }

    #[test]
    fn skip_last_task_goes_idle() {
        let mut session = session_with(&[work("a")]);
        session.skip();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.queue().is_empty());
        assert!(session.current_task().is_none());
        assert_eq!(session.remaining_secs(), 1500);
    }

    #[test]
    fn skip_in_idle_is_ignored() {
        let mut session = Session::default();
        let events = session.skip();
        assert!(events.iter().all(Event::is_warning));
    }

    #[test]
    fn reset_leaves_queue_and_stays_idle() {
        let mut session = session_with(&[work("a").with_duration(10)]);
        session.reset();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.queue().len(), 1);
        assert!(session.current_task().is_none());
        assert_eq!(session.remaining_secs(), 1500);
        assert!(session.interval().is_none());
    }

    #[test]
    fn clear_queue_returns_to_idle() {
        let mut session = session_with(&[work("a"), work("b")]);
        let events = session.clear_queue();
        assert!(matches!(events[0], Event::QueueCleared { removed: 2, .. }));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.queue().is_empty());
        assert!(session.interval().is_none());
    }

    #[test]
    fn reset_during_break_goes_idle_without_auto_start() {
        let mut pool = MemoryPool::new(vec![work("a"), work("b")]);
        let mut session = session_with(&[work("a").with_duration(1), work("b")]);
        tick_n(&mut session, &mut pool, 60);
        assert_eq!(session.state(), SessionState::Break);
        let break_interval = session.interval().unwrap();

        session.reset();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.interval().is_none());
        assert_eq!(session.queue().head().unwrap().id, "b");
        assert!(session.current_task().is_none());

        // The old break interval can no longer drive the session.
        assert!(session.tick(break_interval, &mut pool).is_empty());
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.remaining_secs(), 1500);
    }

    #[test]
    fn reset_while_paused_goes_idle() {
        let mut pool = MemoryPool::new(vec![work("a")]);
        let mut session = session_with(&[work("a")]);
        tick_n(&mut session, &mut pool, 10);
        session.pause();

        session.reset();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.interval().is_none());
        assert_eq!(session.queue().len(), 1);
        assert!(session.current_task().is_none());
        assert_eq!(session.remaining_secs(), 1500);
    }

    #[test]
    fn clear_queue_during_break_goes_idle() {
        let mut pool = MemoryPool::new(vec![work("a"), work("b")]);
        let mut session = session_with(&[work("a").with_duration(1), work("b")]);
        tick_n(&mut session, &mut pool, 60);
        assert_eq!(session.state(), SessionState::Break);

        let events = session.clear_queue();
        assert!(matches!(events[0], Event::QueueCleared { removed: 1, .. }));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.interval().is_none());
        assert!(session.queue().is_empty());
    }

    #[test]
    fn clear_queue_while_paused_goes_idle() {
        let mut pool = MemoryPool::new(vec![work("a")]);
        let mut session = session_with(&[work("a"), work("b")]);
        tick_n(&mut session, &mut pool, 5);
        session.pause();

        session.clear_queue();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.interval().is_none());
        assert!(session.queue().is_empty());
        assert!(session.current_task().is_none());
    }

    #[test]
    fn start_during_break_is_ignored() {
        let mut pool = MemoryPool::new(vec![work("a"), work("b")]);
        let mut session = session_with(&[work("a").with_duration(1), work("b")]);
        tick_n(&mut session, &mut pool, 60);
        let interval = session.interval();

        let events = session.start();
        assert!(matches!(
            events.as_slice(),
            [Event::Warning {
                warning: Warning::TransitionIgnored,
                ..
            }]
        ));
        assert_eq!(session.state(), SessionState::Break);
        assert_eq!(session.interval(), interval);
        assert_eq!(session.remaining_secs(), 300);
    }

    #[test]
    fn cancelled_task_can_be_drawn_again() {
        let pool = vec![work("a")];
        let mut session = Session::default();
        let mut rng = rand::thread_rng();
        assert_eq!(session.spin(&pool, &mut rng).unwrap().id, "a");
        session.cancel_selection().unwrap();
        assert_eq!(session.spin(&pool, &mut rng).unwrap().id, "a");
    }

    #[test]
    fn second_spin_rejected_while_pending() {
        let pool = vec![work("a"), work("b")];
        let mut session = Session::default();
        let mut rng = rand::thread_rng();
        session.spin(&pool, &mut rng).unwrap();
        assert_eq!(session.spin(&pool, &mut rng), Err(SelectionError::SelectionPending));
        session.cancel_selection().unwrap();
        assert!(session.spin(&pool, &mut rng).is_ok());
    }

    #[test]
    fn confirm_without_pending_fails() {
        let mut session = Session::default();
        assert_eq!(session.confirm().unwrap_err(), SelectionError::NothingPending);
    }

    #[test]
    fn leisure_pull_keeps_current_task_at_head() {
        let pool = vec![work("a"), leisure("l")];
        let mut session = session_with(&[work("a"), work("b")]);
        session.promote_leisure(&pool);
        let ids: Vec<&str> = session.queue().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "l", "b"]);
        assert_eq!(session.current_task().unwrap().id, "a");
    }

    #[test]
    fn leisure_pull_moves_queued_leisure_forward() {
        let mut session = session_with(&[work("a"), work("b"), leisure("l")]);
        session.promote_leisure(&[]);
        let ids: Vec<&str> = session.queue().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "l", "b"]);
    }

    #[test]
    fn leisure_pull_when_idle_starts_it() {
        let mut session = Session::default();
        let events = session.promote_leisure(&[work("a"), leisure("l")]);
        assert!(events.iter().any(|e| matches!(e, Event::SessionStarted { .. })));
        assert_eq!(session.current_task().unwrap().id, "l");
    }

    #[test]
    fn leisure_pull_without_leisure_warns() {
        let mut session = session_with(&[work("a")]);
        let events = session.promote_leisure(&[work("a")]);
        assert!(events.iter().all(Event::is_warning));
        assert_eq!(session.queue().len(), 1);
    }

    #[test]
    fn forget_task_spares_current() {
        let mut session = session_with(&[work("a"), work("b"), work("a")]);
        assert_eq!(session.forget_task("a"), 1);
        assert_eq!(session.queue().len(), 2);
        assert_eq!(session.current_task().unwrap().id, "a");
    }

    #[test]
    fn session_survives_serde_roundtrip() {
        let session = session_with(&[work("a"), work("b")]);
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.state(), SessionState::Running);
        assert_eq!(restored.interval(), session.interval());
        assert_eq!(restored.queue(), session.queue());
    }
}
