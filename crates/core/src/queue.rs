//! Fixed-capacity circular FIFO queue.
//!
//! Storage is a plain array of `N` slots plus a head index and a count. The
//! logical element at offset `i` (0 = head) lives in slot `(head + i) % N`, and
//! the next free slot is `(head + len) % N`, so no separate tail index is kept.
//! Nothing on this path allocates.

use crate::error::{Container, SupplyError};

/// Circular queue of `N` slots.
#[derive(Debug, Clone)]
pub struct RingQueue<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    len: usize,
}

impl<T: Copy, const N: usize> RingQueue<T, N> {
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "RingQueue capacity must be non-zero");

    /// Create an empty queue.
    pub fn new() -> Self {
        let () = Self::NON_ZERO_CAPACITY;
        Self {
            slots: [None; N],
            head: 0,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Physical slot of the current head (exposed for diagnostics and tests).
    pub fn head_index(&self) -> usize {
        self.head
    }

    #[inline(always)]
    fn slot_of(&self, offset: usize) -> usize {
        (self.head + offset) % N
    }

    /// Append at the tail.
    ///
    /// Fails without touching the queue when it is full.
    pub fn enqueue(&mut self, item: T) -> Result<(), SupplyError> {
        if self.is_full() {
            return Err(SupplyError::CapacityExceeded(Container::Queue));
        }
        let tail = self.slot_of(self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the head.
    pub fn dequeue(&mut self) -> Result<T, SupplyError> {
        if self.is_empty() {
            return Err(SupplyError::EmptyContainer(Container::Queue));
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % N;
        self.len -= 1;
        item.ok_or(SupplyError::EmptyContainer(Container::Queue))
    }

    /// Logical element at `offset` from the head, if `offset < len`.
    pub fn peek_at(&self, offset: usize) -> Option<&T> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.slot_of(offset)].as_ref()
    }

    pub fn front(&self) -> Option<&T> {
        self.peek_at(0)
    }

    /// Mutable access to the logical element at `offset`.
    ///
    /// Only transfer operations rewrite elements in place; occupancy never changes here.
    pub(crate) fn peek_at_mut(&mut self, offset: usize) -> Option<&mut T> {
        if offset >= self.len {
            return None;
        }
        let slot = self.slot_of(offset);
        self.slots[slot].as_mut()
    }

    /// Iterate head → tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| self.peek_at(offset))
    }
}

impl<T: Copy, const N: usize> Default for RingQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
