//! Ordered queue of task snapshots waiting for a focus session.
//!
//! Entries are copies taken when a task is confirmed; later pool updates
//! (a completion count bump, a rename) do not reach them. The same task id
//! may appear more than once.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskCategory};

/// Where a promoted task ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromoteOutcome {
    /// Already queued further back; moved forward.
    Moved { from: usize },
    /// Not queued; inserted.
    Inserted,
    /// Already in the target slot.
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskQueue {
    items: Vec<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn head(&self) -> Option<&Task> {
        self.items.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.items.iter().any(|t| t.id == task_id)
    }

    /// Append to the tail.
    pub fn enqueue(&mut self, task: Task) {
        self.items.push(task);
    }

    /// Remove and return index 0.
    pub fn dequeue_head(&mut self) -> Option<Task> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Bring `task` to the front.
    pub fn promote(&mut self, task: Task) -> PromoteOutcome {
        self.promote_to(task, 0)
    }

    /// Bring `task` to `slot`, the first position that may be displaced.
    ///
    /// A copy already queued behind `slot` is moved; one at `slot` is left
    /// alone; otherwise the snapshot is inserted. Entries before `slot` are
    /// never touched, and the task is never duplicated.
    pub fn promote_to(&mut self, task: Task, slot: usize) -> PromoteOutcome {
        let slot = slot.min(self.items.len());
        if self.items.get(slot).map(|t| t.id == task.id).unwrap_or(false) {
            return PromoteOutcome::Unchanged;
        }
        let existing = self
            .items
            .iter()
            .enumerate()
            .skip(slot + 1)
            .find(|(_, t)| t.id == task.id)
            .map(|(i, _)| i);
        match existing {
            Some(from) => {
                let moved = self.items.remove(from);
                self.items.insert(slot, moved);
                PromoteOutcome::Moved { from }
            }
            None => {
                self.items.insert(slot, task);
                PromoteOutcome::Inserted
            }
        }
    }

    /// First queued task of `category` at or after `from`.
    pub fn find_category_from(&self, category: TaskCategory, from: usize) -> Option<&Task> {
        self.items.iter().skip(from).find(|t| t.category == category)
    }

    /// Drop every queued copy of a task at or after `from`. Returns how many went.
    pub fn remove_task_from(&mut self, task_id: &str, from: usize) -> usize {
        let before = self.items.len();
        let mut index = 0;
        self.items.retain(|t| {
            let keep = index < from || t.id != task_id;
            index += 1;
            keep
        });
        before - self.items.len()
    }

    /// Empty the queue unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, category: TaskCategory) -> Task {
        Task::new(id, id.to_uppercase(), category)
    }

    fn ids(queue: &TaskQueue) -> Vec<&str> {
        queue.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn enqueue_and_dequeue_are_fifo() {
        let mut queue = TaskQueue::new();
        queue.enqueue(task("a", TaskCategory::Work));
        queue.enqueue(task("b", TaskCategory::Work));
        queue.enqueue(task("a", TaskCategory::Work));
        assert_eq!(ids(&queue), ["a", "b", "a"]);
        assert_eq!(queue.dequeue_head().unwrap().id, "a");
        assert_eq!(ids(&queue), ["b", "a"]);
    }

    #[test]
    fn dequeue_empty_is_none() {
        assert!(TaskQueue::new().dequeue_head().is_none());
    }

    #[test]
    fn promote_moves_existing_entry() {
        let mut queue = TaskQueue::new();
        queue.enqueue(task("a", TaskCategory::Work));
        queue.enqueue(task("b", TaskCategory::Creative));
        queue.enqueue(task("l", TaskCategory::Leisure));
        let outcome = queue.promote(task("l", TaskCategory::Leisure));
        assert_eq!(outcome, PromoteOutcome::Moved { from: 2 });
        assert_eq!(ids(&queue), ["l", "a", "b"]);
    }

    #[test]
    fn promote_inserts_missing_task() {
        let mut queue = TaskQueue::new();
        queue.enqueue(task("a", TaskCategory::Work));
        assert_eq!(queue.promote(task("l", TaskCategory::Leisure)), PromoteOutcome::Inserted);
        assert_eq!(ids(&queue), ["l", "a"]);
    }

    #[test]
    fn promote_never_duplicates_head() {
        let mut queue = TaskQueue::new();
        queue.enqueue(task("l", TaskCategory::Leisure));
        queue.enqueue(task("a", TaskCategory::Work));
        assert_eq!(queue.promote(task("l", TaskCategory::Leisure)), PromoteOutcome::Unchanged);
        assert_eq!(ids(&queue), ["l", "a"]);
    }

    #[test]
    fn promote_to_slot_keeps_entries_before_it() {
        let mut queue = TaskQueue::new();
        queue.enqueue(task("cur", TaskCategory::Work));
        queue.enqueue(task("b", TaskCategory::Work));
        queue.enqueue(task("l", TaskCategory::Leisure));
        assert_eq!(
            queue.promote_to(task("l", TaskCategory::Leisure), 1),
            PromoteOutcome::Moved { from: 2 }
        );
        assert_eq!(ids(&queue), ["cur", "l", "b"]);
    }

    #[test]
    fn promote_to_past_end_appends() {
        let mut queue = TaskQueue::new();
        queue.enqueue(task("cur", TaskCategory::Work));
        assert_eq!(
            queue.promote_to(task("l", TaskCategory::Leisure), 1),
            PromoteOutcome::Inserted
        );
        assert_eq!(ids(&queue), ["cur", "l"]);
    }

    #[test]
    fn remove_task_from_spares_earlier_entries() {
        let mut queue = TaskQueue::new();
        queue.enqueue(task("a", TaskCategory::Work));
        queue.enqueue(task("b", TaskCategory::Work));
        queue.enqueue(task("a", TaskCategory::Work));
        assert_eq!(queue.remove_task_from("a", 1), 1);
        assert_eq!(ids(&queue), ["a", "b"]);
        assert_eq!(queue.remove_task_from("a", 0), 1);
        assert_eq!(ids(&queue), ["b"]);
    }

    #[test]
    fn clear_empties() {
        let mut queue = TaskQueue::new();
        queue.enqueue(task("a", TaskCategory::Work));
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.head().is_none());
    }
}
