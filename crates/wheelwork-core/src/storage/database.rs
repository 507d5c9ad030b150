//! SQLite-backed task pool.
//!
//! Provides persistent storage for:
//! - The task pool
//! - Completion history (one snapshot row per finished focus session)
//! - Key-value store for application state (the CLI keeps its session here)

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use super::data_dir;
use crate::error::{CoreError, DatabaseError, SyncError};
use crate::pool::TaskPool;
use crate::task::{starter_tasks, CompletedTask, NewTask, Task, TaskCategory};

const SEEDED_KEY: &str = "seeded";

/// SQLite database holding the task pool.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Open the store at `<data_dir>/wheelwork.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("wheelwork.db");
        Ok(Self::open_at(&path)?)
    }

    pub fn open_at(path: &Path) -> Result<Self, DatabaseError> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::init(conn)
    }

    /// Open an in-memory store, seeded like a fresh file.
    pub fn open_memory() -> Result<Self, DatabaseError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, DatabaseError> {
        let store = Self { conn };
        store
            .migrate()
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        store.seed()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS tasks (
                id                  TEXT PRIMARY KEY,
                title               TEXT NOT NULL,
                category            TEXT NOT NULL,
                completed_pomodoros INTEGER NOT NULL DEFAULT 0,
                duration            INTEGER
            );

            CREATE TABLE IF NOT EXISTS completed_tasks (
                id                  INTEGER PRIMARY KEY AUTOINCREMENT,
                task_id             TEXT NOT NULL,
                title               TEXT NOT NULL,
                category            TEXT NOT NULL,
                completed_pomodoros INTEGER NOT NULL,
                duration            INTEGER,
                completed_at        TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_completed_tasks_completed_at ON completed_tasks(completed_at);",
        )?;
        Ok(())
    }

    /// Starter tasks go in once; deleting them later does not bring them back.
    fn seed(&self) -> Result<(), DatabaseError> {
        if self.kv_get(SEEDED_KEY)?.is_some() {
            return Ok(());
        }
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
        if count == 0 {
            for task in starter_tasks() {
                self.insert_task(&task)?;
            }
            info!("seeded starter tasks");
        }
        self.kv_set(SEEDED_KEY, "1")?;
        Ok(())
    }

    fn insert_task(&self, task: &Task) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO tasks (id, title, category, completed_pomodoros, duration)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                task.id,
                task.title,
                task.category.as_str(),
                task.completed_pomodoros,
                task.duration,
            ],
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

fn category_at(row: &Row<'_>, idx: usize) -> Result<TaskCategory, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn task_from_row(row: &Row<'_>) -> Result<Task, rusqlite::Error> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        category: category_at(row, 2)?,
        completed_pomodoros: row.get(3)?,
        duration: row.get(4)?,
    })
}

fn completed_from_row(row: &Row<'_>) -> Result<CompletedTask, rusqlite::Error> {
    let task = task_from_row(row)?;
    let raw: String = row.get(5)?;
    let completed_at = DateTime::parse_from_rfc3339(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);
    Ok(CompletedTask::new(task, completed_at))
}

impl TaskPool for TaskStore {
    fn tasks(&self) -> Result<Vec<Task>, SyncError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, category, completed_pomodoros, duration
             FROM tasks ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], task_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn completed_tasks(&self) -> Result<Vec<CompletedTask>, SyncError> {
        let mut stmt = self.conn.prepare(
            "SELECT task_id, title, category, completed_pomodoros, duration, completed_at
             FROM completed_tasks ORDER BY id",
        )?;
        let rows = stmt.query_map([], completed_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn record_completion(&mut self, task_id: &str) -> Result<CompletedTask, SyncError> {
        let tx = self.conn.transaction()?;
        let updated = tx.execute(
            "UPDATE tasks SET completed_pomodoros = completed_pomodoros + 1 WHERE id = ?1",
            params![task_id],
        )?;
        if updated == 0 {
            return Err(SyncError::TaskNotFound(task_id.to_string()));
        }
        let task = tx.query_row(
            "SELECT id, title, category, completed_pomodoros, duration FROM tasks WHERE id = ?1",
            params![task_id],
            task_from_row,
        )?;
        let record = CompletedTask::new(task, Utc::now());
        tx.execute(
            "INSERT INTO completed_tasks
                (task_id, title, category, completed_pomodoros, duration, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.task.id,
                record.task.title,
                record.task.category.as_str(),
                record.task.completed_pomodoros,
                record.task.duration,
                record.completed_at.to_rfc3339(),
            ],
        )?;
        tx.commit()?;
        debug!(task_id, total = record.task.completed_pomodoros, "completion recorded");
        Ok(record)
    }

    fn create_task(&mut self, new_task: NewTask) -> Result<Task, SyncError> {
        let task = new_task.validated()?.into_task();
        self.insert_task(&task)?;
        Ok(task)
    }

    fn delete_task(&mut self, task_id: &str) -> Result<bool, SyncError> {
        let removed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![task_id])?;
        Ok(removed > 0)
    }
}
