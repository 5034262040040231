//! Session state: the queue, the reserve, and the piece source that feeds them.
//!
//! [`Session::apply_action`] is the single entry point for menu commands. It
//! performs the container or transfer operation and then applies the refill
//! policy: after a play or a reserve the queue is topped up with one freshly
//! supplied piece, unless auto refill is switched off.

use tracing::{debug, info, warn};

use crate::error::SupplyError;
use crate::queue::RingQueue;
use crate::rng::{PieceSource, RandomSupplier};
use crate::snapshot::SupplySnapshot;
use crate::stack::BoundedStack;
use crate::transfer;
use crate::types::{Piece, SupplyAction, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Queue of upcoming pieces.
pub type UpcomingQueue = RingQueue<Piece, QUEUE_CAPACITY>;

/// Stack of reserved pieces.
pub type ReserveStack = BoundedStack<Piece, RESERVE_CAPACITY>;

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the default random supplier
    pub seed: u32,
    /// Refill the queue after play and reserve
    pub auto_refill: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            auto_refill: true,
        }
    }
}

/// Outcome of a successfully applied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyEvent {
    Played { piece: Piece, refilled: bool },
    Inserted(Piece),
    Reserved { piece: Piece, refilled: bool },
    UsedReserved(Piece),
    SwappedFront,
    SwappedThree,
    Shown,
    Quit,
}

/// Complete supply state
#[derive(Debug, Clone)]
pub struct Session<S = RandomSupplier> {
    queue: UpcomingQueue,
    reserve: ReserveStack,
    source: S,
    config: SessionConfig,
    actions_applied: u32,
    finished: bool,
}

impl Session<RandomSupplier> {
    /// Create a session fed by a [`RandomSupplier`] seeded from `config`.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_source(RandomSupplier::new(config.seed), config)
    }
}

impl<S: PieceSource> Session<S> {
    /// Create a session and fill the queue to capacity from `source`.
    pub fn with_source(source: S, config: SessionConfig) -> Self {
        let mut session = Self {
            queue: UpcomingQueue::new(),
            reserve: ReserveStack::new(),
            source,
            config,
            actions_applied: 0,
            finished: false,
        };
        while !session.queue.is_full() {
            let piece = session.source.next_piece();
            if session.queue.enqueue(piece).is_err() {
                break;
            }
        }
        info!(
            seed = config.seed,
            auto_refill = config.auto_refill,
            "session started with a full queue"
        );
        session
    }

    pub fn queue(&self) -> &UpcomingQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn actions_applied(&self) -> u32 {
        self.actions_applied
    }

    /// True once a quit action has been applied.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Apply one menu command.
    ///
    /// On error neither container has changed.
    pub fn apply_action(&mut self, action: SupplyAction) -> Result<SupplyEvent, SupplyError> {
        let result = self.dispatch(action);
        match &result {
            Ok(event) => {
                self.actions_applied = self.actions_applied.wrapping_add(1);
                debug!(
                    action = action.as_str(),
                    ?event,
                    queue_len = self.queue.len(),
                    reserve_len = self.reserve.len(),
                    "action applied"
                );
            }
            Err(err) => {
                warn!(action = action.as_str(), %err, "action rejected");
            }
        }
        result
    }

    fn dispatch(&mut self, action: SupplyAction) -> Result<SupplyEvent, SupplyError> {
        match action {
            SupplyAction::Play => {
                let piece = self.queue.dequeue()?;
                let refilled = self.refill();
                Ok(SupplyEvent::Played { piece, refilled })
            }
            SupplyAction::Insert => {
                // The id is consumed even when the queue turns the piece away.
                let piece = self.source.next_piece();
                self.queue.enqueue(piece)?;
                Ok(SupplyEvent::Inserted(piece))
            }
            SupplyAction::Reserve => {
                let piece = transfer::reserve(&mut self.queue, &mut self.reserve)?;
                let refilled = self.refill();
                Ok(SupplyEvent::Reserved { piece, refilled })
            }
            SupplyAction::UseReserved => {
                let piece = self.reserve.pop()?;
                Ok(SupplyEvent::UsedReserved(piece))
            }
            SupplyAction::SwapFront => {
                transfer::swap_front_top(&mut self.queue, &mut self.reserve)?;
                Ok(SupplyEvent::SwappedFront)
            }
            SupplyAction::SwapThree => {
                transfer::swap_three(&mut self.queue, &mut self.reserve)?;
                Ok(SupplyEvent::SwappedThree)
            }
            SupplyAction::Show => Ok(SupplyEvent::Shown),
            SupplyAction::Quit => {
                self.finished = true;
                info!(actions = self.actions_applied, "session finished");
                Ok(SupplyEvent::Quit)
            }
        }
    }

    /// Top the queue up with one supplied piece.
    fn refill(&mut self) -> bool {
        if !self.config.auto_refill || self.queue.is_full() {
            return false;
        }
        let piece = self.source.next_piece();
        match self.queue.enqueue(piece) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, piece = %piece, "refill failed");
                false
            }
        }
    }

    /// Copy the current state into `out`, reusing its storage.
    pub fn snapshot_into(&self, out: &mut SupplySnapshot) {
        out.upcoming.clear();
        out.upcoming.extend(self.queue.iter().copied());
        out.reserved.clear();
        out.reserved.extend(self.reserve.iter_top_down().copied());
        out.queue_capacity = self.queue.capacity();
        out.reserve_capacity = self.reserve.capacity();
        out.auto_refill = self.config.auto_refill;
        out.seed = self.config.seed;
        out.actions_applied = self.actions_applied;
        out.finished = self.finished;
    }

    pub fn snapshot(&self) -> SupplySnapshot {
        let mut snap = SupplySnapshot::empty();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Session<RandomSupplier> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
