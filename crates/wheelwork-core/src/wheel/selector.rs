//! Task selection.
//!
//! Everything here is a pure function of the pool, the queue, the wheel
//! settings and an injected random source. Nothing is mutated: the caller
//! confirms a result before it reaches the queue.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::WheelSettings;
use crate::queue::TaskQueue;
use crate::task::{Task, TaskCategory};

/// One slice of the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSegment {
    pub task_id: String,
    pub title: String,
    pub category: TaskCategory,
    /// Probability of landing here, in percent (segments sum to 100).
    pub share_pct: f64,
    /// Angle where the slice starts, in degrees.
    pub start_deg: f64,
    /// Angular width of the slice, in degrees.
    pub sweep_deg: f64,
}

/// Tasks the wheel shows: allowed by the mode and not already queued.
///
/// A task awaiting confirmation stays in this list.
pub fn eligible_tasks(pool: &[Task], queue: &TaskQueue, settings: &WheelSettings) -> Vec<Task> {
    pool.iter()
        .filter(|t| settings.mode.allows(t.category, &settings.enabled))
        .filter(|t| !queue.contains(&t.id))
        .cloned()
        .collect()
}

/// Probability share (percent) of every task in `tasks`.
///
/// Uniform for the plain modes. In advanced mode, categories without a task
/// in `tasks` carry no mass, the remaining category weights are normalized to
/// 100 and each category's share is split evenly across its tasks. Returns
/// all zeros when every represented category has weight 0.
fn shares(tasks: &[Task], settings: &WheelSettings) -> Vec<f64> {
    if tasks.is_empty() {
        return Vec::new();
    }
    if !settings.mode.is_weighted() {
        let each = 100.0 / tasks.len() as f64;
        return vec![each; tasks.len()];
    }

    let count_in = |category: TaskCategory| tasks.iter().filter(|t| t.category == category).count();
    let represented_total: u64 = TaskCategory::ALL
        .iter()
        .filter(|c| count_in(**c) > 0)
        .map(|c| u64::from(settings.weights.get(*c)))
        .sum();
    if represented_total == 0 {
        return vec![0.0; tasks.len()];
    }

    tasks
        .iter()
        .map(|t| {
            let normalized =
                f64::from(settings.weights.get(t.category)) * 100.0 / represented_total as f64;
            normalized / count_in(t.category) as f64
        })
        .collect()
}

/// Wheel layout for display: every eligible task with its share and angle.
pub fn wheel_segments(pool: &[Task], queue: &TaskQueue, settings: &WheelSettings) -> Vec<WheelSegment> {
    let tasks = eligible_tasks(pool, queue, settings);
    let mut shares = shares(&tasks, settings);
    if shares.iter().all(|s| *s == 0.0) && !shares.is_empty() {
        let each = 100.0 / shares.len() as f64;
        shares.iter_mut().for_each(|s| *s = each);
    }

    let mut start = 0.0;
    tasks
        .into_iter()
        .zip(shares)
        .map(|(task, share_pct)| {
            let sweep_deg = share_pct * 3.6;
            let segment = WheelSegment {
                task_id: task.id,
                title: task.title,
                category: task.category,
                share_pct,
                start_deg: start,
                sweep_deg,
            };
            start += sweep_deg;
            segment
        })
        .collect()
}

/// Spin the wheel.
///
/// `pending` is the id of a result still awaiting confirmation; it is not
/// drawn again. Returns `None` when nothing is eligible.
pub fn select<R: Rng + ?Sized>(
    pool: &[Task],
    queue: &TaskQueue,
    pending: Option<&str>,
    settings: &WheelSettings,
    rng: &mut R,
) -> Option<Task> {
    let candidates: Vec<Task> = eligible_tasks(pool, queue, settings)
        .into_iter()
        .filter(|t| Some(t.id.as_str()) != pending)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let draw: f64 = rng.gen();
    let shares = shares(&candidates, settings);
    let total: f64 = shares.iter().sum();

    let index = if total > 0.0 && settings.mode.is_weighted() {
        let target = draw * total;
        let mut cumulative = 0.0;
        shares
            .iter()
            .position(|s| {
                cumulative += s;
                target < cumulative
            })
            .unwrap_or(candidates.len() - 1)
    } else {
        ((draw * candidates.len() as f64).floor() as usize).min(candidates.len() - 1)
    };

    let chosen = candidates.into_iter().nth(index)?;
    debug!(task_id = %chosen.id, mode = %settings.mode, draw, "wheel selected task");
    Some(chosen)
}
