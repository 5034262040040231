//! Transfer operations coupling the upcoming queue and the reserve stack.
//!
//! Each operation checks its full precondition before touching either
//! container, so a failure leaves both exactly as they were. None of them
//! refills the queue; that is the session's job.

use std::mem;

use crate::error::{Container, SupplyError};
use crate::queue::RingQueue;
use crate::stack::BoundedStack;
use crate::types::BULK_SWAP_COUNT;

/// Move the queue head onto the stack and return the moved element.
pub fn reserve<T: Copy, const Q: usize, const S: usize>(
    queue: &mut RingQueue<T, Q>,
    stack: &mut BoundedStack<T, S>,
) -> Result<T, SupplyError> {
    if queue.is_empty() {
        return Err(SupplyError::EmptyContainer(Container::Queue));
    }
    if stack.is_full() {
        return Err(SupplyError::CapacityExceeded(Container::Reserve));
    }
    let item = queue.dequeue()?;
    stack.push(item)?;
    Ok(item)
}

/// Exchange the queue head with the stack top in place.
///
/// Applying it twice restores both containers.
pub fn swap_front_top<T: Copy, const Q: usize, const S: usize>(
    queue: &mut RingQueue<T, Q>,
    stack: &mut BoundedStack<T, S>,
) -> Result<(), SupplyError> {
    let front = queue
        .peek_at_mut(0)
        .ok_or(SupplyError::EmptyContainer(Container::Queue))?;
    let top = stack
        .peek_depth_mut(0)
        .ok_or(SupplyError::EmptyContainer(Container::Reserve))?;
    mem::swap(front, top);
    Ok(())
}

/// Exchange the three head-most queue elements with the three stack elements.
///
/// Queue offset `i` pairs with stack depth `i`: head with top, head+1 with
/// top-1, head+2 with bottom. Requires at least three queued elements and
/// exactly three stacked ones.
pub fn swap_three<T: Copy, const Q: usize, const S: usize>(
    queue: &mut RingQueue<T, Q>,
    stack: &mut BoundedStack<T, S>,
) -> Result<(), SupplyError> {
    if queue.len() < BULK_SWAP_COUNT || stack.len() != BULK_SWAP_COUNT {
        return Err(SupplyError::PreconditionUnmet {
            required: BULK_SWAP_COUNT,
            queue_len: queue.len(),
            reserve_len: stack.len(),
        });
    }
    for i in 0..BULK_SWAP_COUNT {
        let queued = queue.peek_at_mut(i);
        let reserved = stack.peek_depth_mut(i);
        debug_assert!(
            queued.is_some() && reserved.is_some(),
            "swap_three lost pair {i} after its occupancy check"
        );
        if let (Some(queued), Some(reserved)) = (queued, reserved) {
            mem::swap(queued, reserved);
        }
    }
    Ok(())
}
