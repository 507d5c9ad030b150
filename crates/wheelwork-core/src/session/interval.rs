use serde::{Deserialize, Serialize};

/// Handle of one repeating one-second interval registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalId(u64);

impl IntervalId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Holds at most one live interval registration.
///
/// Arming always cancels the previous registration, so a tick carrying an
/// old id is recognisable and dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntervalSlot {
    next: u64,
    active: Option<IntervalId>,
}

impl IntervalSlot {
    pub fn arm(&mut self) -> IntervalId {
        self.next += 1;
        let id = IntervalId(self.next);
        self.active = Some(id);
        id
    }

    pub fn cancel(&mut self) -> Option<IntervalId> {
        self.active.take()
    }

    pub fn active(&self) -> Option<IntervalId> {
        self.active
    }

    pub fn accepts(&self, id: IntervalId) -> bool {
        self.active == Some(id)
    }
}
