//! Countdown state machine.
//!
//! Clock-agnostic: one `tick()` is one second, delivered by whoever owns the
//! interval. The timer never looks at wall time.

use serde::{Deserialize, Serialize};

use super::{Durations, SessionState};

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not counting (idle or paused).
    Ignored,
    /// Counted down, time left.
    Counting,
    /// Focus countdown hit zero.
    FocusElapsed,
    /// Break countdown hit zero.
    BreakElapsed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    state: SessionState,
    remaining_secs: u64,
    /// Length of the current countdown, for progress.
    total_secs: u64,
    durations: Durations,
}

impl FocusTimer {
    /// Idle, showing the default focus length.
    pub fn new(durations: Durations) -> Self {
        Self {
            state: SessionState::Idle,
            remaining_secs: durations.focus_secs,
            total_secs: durations.focus_secs,
            durations,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    /// 0.0 .. 1.0 progress within the current countdown.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / self.total_secs as f64)
    }

    // ── Transitions ──────────────────────────────────────────────────

    pub fn begin_focus(&mut self, secs: u64) {
        self.state = SessionState::Running;
        self.remaining_secs = secs;
        self.total_secs = secs;
    }

    /// Freeze at the current value.
    pub fn freeze(&mut self) {
        self.state = SessionState::Paused;
    }

    /// Continue a frozen countdown.
    pub fn resume(&mut self) {
        self.state = SessionState::Running;
    }

    pub fn begin_break(&mut self) {
        self.state = SessionState::Break;
        self.remaining_secs = self.durations.short_break_secs;
        self.total_secs = self.durations.short_break_secs;
    }

    /// Back to idle with the default focus length.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.remaining_secs = self.durations.focus_secs;
        self.total_secs = self.durations.focus_secs;
    }

    /// Replace the defaults. An idle timer picks up the new focus length.
    pub fn set_durations(&mut self, durations: Durations) {
        self.durations = durations;
        if self.state == SessionState::Idle {
            self.reset();
        }
    }

    /// Count one second.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            SessionState::Running => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs == 0 {
                    TickOutcome::FocusElapsed
                } else {
                    TickOutcome::Counting
                }
            }
            SessionState::Break => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs == 0 {
                    TickOutcome::BreakElapsed
                } else {
                    TickOutcome::Counting
                }
            }
            SessionState::Idle | SessionState::Paused => TickOutcome::Ignored,
        }
    }
}
