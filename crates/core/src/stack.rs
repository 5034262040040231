//! Fixed-capacity LIFO stack backed by an inline `ArrayVec`.

use arrayvec::ArrayVec;

use crate::error::{Container, SupplyError};

/// Stack of at most `N` elements.
///
/// The bottom of the stack is index 0 and the top is `len - 1`.
#[derive(Debug, Clone)]
pub struct BoundedStack<T, const N: usize> {
    items: ArrayVec<T, N>,
}

impl<T: Copy, const N: usize> BoundedStack<T, N> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Index of the top element, `None` when empty.
    pub fn top_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    pub fn push(&mut self, item: T) -> Result<(), SupplyError> {
        self.items
            .try_push(item)
            .map_err(|_| SupplyError::CapacityExceeded(Container::Reserve))
    }

    pub fn pop(&mut self) -> Result<T, SupplyError> {
        self.items
            .pop()
            .ok_or(SupplyError::EmptyContainer(Container::Reserve))
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Element `depth` positions below the top (0 = top).
    pub fn peek_depth(&self, depth: usize) -> Option<&T> {
        let idx = self.top_index()?.checked_sub(depth)?;
        self.items.get(idx)
    }

    pub(crate) fn peek_depth_mut(&mut self, depth: usize) -> Option<&mut T> {
        let idx = self.top_index()?.checked_sub(depth)?;
        self.items.get_mut(idx)
    }

    /// Iterate top → bottom.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T: Copy, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut s: BoundedStack<u32, 3> = BoundedStack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.push(3).unwrap();
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert_eq!(s.pop(), Err(SupplyError::EmptyContainer(Container::Reserve)));
    }

    #[test]
    fn test_push_full_is_rejected() {
        let mut s: BoundedStack<u32, 2> = BoundedStack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(
            s.push(3),
            Err(SupplyError::CapacityExceeded(Container::Reserve))
        );
        assert_eq!(s.iter_top_down().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn test_top_index_sentinel() {
        let mut s: BoundedStack<u32, 3> = BoundedStack::new();
        assert_eq!(s.top_index(), None);
        s.push(7).unwrap();
        assert_eq!(s.top_index(), Some(0));
        s.pop().unwrap();
        assert_eq!(s.top_index(), None);
        assert!(s.pop().is_err());
        assert_eq!(s.top_index(), None);
    }

    #[test]
    fn test_peek_depth() {
        let mut s: BoundedStack<u32, 3> = BoundedStack::new();
        s.push(10).unwrap();
        s.push(20).unwrap();
        assert_eq!(s.peek(), Some(&20));
        assert_eq!(s.peek_depth(0), Some(&20));
        assert_eq!(s.peek_depth(1), Some(&10));
        assert_eq!(s.peek_depth(2), None);
    }
}
