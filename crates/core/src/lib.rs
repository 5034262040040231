//! Core supply logic - pure, deterministic, and testable
//!
//! This crate holds the two bounded containers of the piece supply and the
//! operations that move pieces between them. It has **no dependencies** on
//! terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every container and transfer rule is covered by unit tests
//! - **Allocation-free**: Containers are fixed arrays sized at compile time
//!
//! # Module Structure
//!
//! - [`queue`]: circular FIFO of upcoming pieces (wrap-around indexing)
//! - [`stack`]: bounded LIFO of reserved pieces
//! - [`transfer`]: reserve, front/top swap and 3-for-3 swap between the two
//! - [`rng`]: seeded piece supplier with its own id counter
//! - [`session`]: menu command dispatch and the refill policy
//! - [`snapshot`]: display-ordered copy of the session state
//! - [`error`]: the error taxonomy shared by all of the above
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{Session, SessionConfig, SupplyEvent};
//! use tetris_stack_types::SupplyAction;
//!
//! let mut session = Session::new(SessionConfig { seed: 12345, auto_refill: true });
//! assert!(session.queue().is_full());
//!
//! // Reserve the front piece; the queue is refilled right away
//! let event = session.apply_action(SupplyAction::Reserve).unwrap();
//! assert!(matches!(event, SupplyEvent::Reserved { refilled: true, .. }));
//! assert_eq!(session.reserve().len(), 1);
//! assert!(session.queue().is_full());
//!
//! // A bulk swap needs a full reserve
//! assert!(session.apply_action(SupplyAction::SwapThree).is_err());
//! ```

pub mod error;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;
pub mod transfer;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use error::{Container, SupplyError};
pub use queue::RingQueue;
pub use rng::{PieceSource, RandomSupplier, SimpleRng};
pub use session::{ReserveStack, Session, SessionConfig, SupplyEvent, UpcomingQueue};
pub use snapshot::SupplySnapshot;
pub use stack::BoundedStack;
pub use transfer::{reserve, swap_front_top, swap_three};
