//! Core error types for wheelwork-core.
//!
//! This module defines the error hierarchy using thiserror. None of these
//! errors is fatal: every one of them leaves the session in `idle` or
//! `paused` so the caller can retry.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wheelwork-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Wheel selection errors
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Task pool synchronisation errors
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Could not determine where configuration lives
    #[error("Cannot resolve data directory: {0}")]
    DataDir(String),
}

/// Errors raised by the wheel before anything is queued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The eligible set for the active mode is empty.
    #[error("no eligible tasks for the current wheel mode")]
    NoEligibleTasks,

    /// A spin result is still waiting for confirmation.
    #[error("a selection is already pending confirmation")]
    SelectionPending,

    /// Confirm or cancel was called without a pending selection.
    #[error("no selection is pending")]
    NothingPending,
}

/// Failures reported by a [`crate::pool::TaskPool`].
///
/// A failed completion rolls the session back to `paused`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The task no longer exists in the pool.
    #[error("task not found: {0}")]
    TaskNotFound(String),

    /// The backing store rejected the operation.
    #[error("storage failure: {0}")]
    Storage(String),

    /// The input was rejected before reaching storage.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Task title is blank after trimming
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Custom duration must be a positive number of minutes
    #[error("invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(u32),

    /// Category string did not parse
    #[error("unknown category '{0}' (expected work, leisure or creative)")]
    UnknownCategory(String),

    /// Wheel mode string did not parse
    #[error("unknown wheel mode '{0}' (expected normal, hard-working, time-to-work or advanced)")]
    UnknownMode(String),

    /// Weight outside 0..=100
    #[error("weight {0} is out of range (0-100)")]
    WeightOutOfRange(u32),

    /// Every category was disabled in advanced mode
    #[error("at least one category must stay enabled")]
    NoCategoryEnabled,
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

impl From<rusqlite::Error> for SyncError {
    fn from(err: rusqlite::Error) -> Self {
        SyncError::Storage(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
