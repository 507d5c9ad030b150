//! Pomodoro session engine.
//!
//! [`FocusTimer`] is the bare countdown state machine; [`Session`] wraps it
//! with the task queue, the pending wheel result and the single interval
//! registration, and is the object front ends talk to.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!           |
//!           v  (completion recorded)
//!         Break -> Idle -> Running (next queued task)
//! ```

mod controller;
mod interval;
mod timer;

pub use controller::Session;
pub use interval::{IntervalId, IntervalSlot};
pub use timer::{FocusTimer, TickOutcome};

use serde::{Deserialize, Serialize};

/// The one session state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Running,
    Paused,
    Break,
}

pub const DEFAULT_FOCUS_MIN: u64 = 25;
pub const DEFAULT_SHORT_BREAK_MIN: u64 = 5;

/// Default focus and break lengths, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub focus_secs: u64,
    pub short_break_secs: u64,
}

impl Durations {
    pub fn from_minutes(focus_min: u64, short_break_min: u64) -> Self {
        Self {
            focus_secs: focus_min.saturating_mul(60),
            short_break_secs: short_break_min.saturating_mul(60),
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_FOCUS_MIN, DEFAULT_SHORT_BREAK_MIN)
    }
}
