//! # Wheelwork Core Library
//!
//! Core logic for a pomodoro timer that picks the next task by spinning a
//! weighted wheel. Everything is available through the standalone CLI; the
//! library itself has no I/O outside [`storage`].
//!
//! ## Architecture
//!
//! - **Wheel**: eligibility by mode, probability shares and a seeded-or-not
//!   weighted draw
//! - **Queue**: ordered FIFO of confirmed tasks with a leisure pull
//! - **Session**: the idle/running/paused/break state machine, driven by
//!   caller-delivered one-second ticks
//! - **Storage**: SQLite task pool and TOML configuration
//!
//! ## Key Components
//!
//! - [`Session`]: session controller, one per user
//! - [`TaskPool`]: where tasks live and completions are recorded
//! - [`TaskStore`]: SQLite implementation of [`TaskPool`]
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod pool;
pub mod queue;
pub mod session;
pub mod stats;
pub mod storage;
pub mod task;
pub mod wheel;

pub use error::{ConfigError, CoreError, DatabaseError, SelectionError, SyncError, ValidationError};
pub use events::{Event, Warning};
pub use pool::{MemoryPool, TaskPool};
pub use queue::{PromoteOutcome, TaskQueue};
pub use session::{Durations, IntervalId, Session, SessionState};
pub use stats::{daily_progress, has_activity, DailyProgress, ProgressStats, MAX_DAILY_WINDOW};
pub use storage::{Config, TaskStore};
pub use task::{CompletedTask, NewTask, Task, TaskCategory};
pub use wheel::{CategoryWeights, EnabledCategories, SelectionMode, WheelSegment, WheelSettings};
