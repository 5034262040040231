//! Supply error types.
//!
//! Every fallible container or transfer operation reports one of:
//! - `CapacityExceeded`: the target container is full
//! - `EmptyContainer`: the source container is empty
//! - `PreconditionUnmet`: the occupancy shape does not allow a bulk swap
//!
//! A failed operation never mutates either container.

use std::fmt;

use thiserror::Error;

/// Which container an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// The upcoming-pieces circular queue
    Queue,
    /// The reserved-pieces stack
    Reserve,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Queue => f.write_str("piece queue"),
            Container::Reserve => f.write_str("reserve stack"),
        }
    }
}

/// Errors reported by queue, stack and transfer operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyError {
    /// Target container has no free slot
    #[error("{0} is full")]
    CapacityExceeded(Container),

    /// Source container has nothing to take
    #[error("{0} is empty")]
    EmptyContainer(Container),

    /// Bulk swap needs at least `required` queued pieces and exactly
    /// `required` reserved pieces.
    #[error(
        "cannot swap {required} pieces: queue holds {queue_len} (needs at least {required}), \
         reserve holds {reserve_len} (needs exactly {required})"
    )]
    PreconditionUnmet {
        /// Pieces exchanged by the swap
        required: usize,
        /// Queue occupancy at the time of the call
        queue_len: usize,
        /// Reserve occupancy at the time of the call
        reserve_len: usize,
    },
}
