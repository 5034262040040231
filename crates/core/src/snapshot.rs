use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Read-only copy of the session state, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SupplySnapshot {
    /// Queue contents, head first.
    pub upcoming: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Reserve contents, top first.
    pub reserved: ArrayVec<Piece, RESERVE_CAPACITY>,
    pub queue_capacity: usize,
    pub reserve_capacity: usize,
    pub auto_refill: bool,
    pub seed: u32,
    pub actions_applied: u32,
    pub finished: bool,
}

impl SupplySnapshot {
    pub fn empty() -> Self {
        Self {
            upcoming: ArrayVec::new(),
            reserved: ArrayVec::new(),
            queue_capacity: QUEUE_CAPACITY,
            reserve_capacity: RESERVE_CAPACITY,
            auto_refill: true,
            seed: 0,
            actions_applied: 0,
            finished: false,
        }
    }

    pub fn front(&self) -> Option<Piece> {
        self.upcoming.first().copied()
    }

    pub fn top(&self) -> Option<Piece> {
        self.reserved.first().copied()
    }
}

impl Default for SupplySnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
