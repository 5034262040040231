//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core containers, terminal rendering, input mapping).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the circular queue |
//! | `RESERVE_CAPACITY` | 3 | Pieces held by the reserve stack |
//! | `BULK_SWAP_COUNT` | 3 | Pieces exchanged by a 3-for-3 swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Piece, PieceKind, SupplyAction, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 7);
//! assert_eq!(piece.kind, PieceKind::T);
//! assert_eq!(piece.id, 7);
//!
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! // Menu codes
//! assert_eq!(SupplyAction::from_code(3), Some(SupplyAction::Reserve));
//! assert_eq!(SupplyAction::Quit.code(), 0);
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of upcoming pieces the circular queue holds (5)
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack holds (3)
pub const RESERVE_CAPACITY: usize = 3;

/// Pieces exchanged by one bulk swap.
///
/// The reserve must hold exactly this many pieces and the queue at least this many.
pub const BULK_SWAP_COUNT: usize = 3;

/// The piece kinds produced by the supplier
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in draw-table order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Uppercase display letter.
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

/// One unit moving through the queue and the reserve.
///
/// Pieces are plain values: every container operation copies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Sequential identifier assigned by the supplier.
    pub id: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.letter(), self.id)
    }
}

/// Commands offered by the session menu
///
/// Each command has a stable numeric code used by the line-oriented console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplyAction {
    /// Dequeue the front piece (and refill the queue)
    Play,
    /// Enqueue a freshly supplied piece
    Insert,
    /// Move the front piece onto the reserve stack (and refill the queue)
    Reserve,
    /// Pop the top reserved piece
    UseReserved,
    /// Exchange the queue front with the reserve top
    SwapFront,
    /// Exchange the first three queued pieces with the three reserved ones
    SwapThree,
    /// Redisplay the current state
    Show,
    /// Leave the session
    Quit,
}

impl SupplyAction {
    /// Menu order.
    pub const ALL: [SupplyAction; 8] = [
        SupplyAction::Play,
        SupplyAction::Insert,
        SupplyAction::Reserve,
        SupplyAction::UseReserved,
        SupplyAction::SwapFront,
        SupplyAction::SwapThree,
        SupplyAction::Show,
        SupplyAction::Quit,
    ];

    /// Numeric menu code
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::SupplyAction;
    ///
    /// assert_eq!(SupplyAction::Play.code(), 1);
    /// assert_eq!(SupplyAction::Show.code(), 9);
    /// ```
    pub fn code(&self) -> u8 {
        match self {
            SupplyAction::Play => 1,
            SupplyAction::Insert => 2,
            SupplyAction::Reserve => 3,
            SupplyAction::UseReserved => 4,
            SupplyAction::SwapFront => 5,
            SupplyAction::SwapThree => 6,
            SupplyAction::Show => 9,
            SupplyAction::Quit => 0,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.code() == code)
    }

    /// camelCase name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyAction::Play => "play",
            SupplyAction::Insert => "insert",
            SupplyAction::Reserve => "reserve",
            SupplyAction::UseReserved => "useReserved",
            SupplyAction::SwapFront => "swapFront",
            SupplyAction::SwapThree => "swapThree",
            SupplyAction::Show => "show",
            SupplyAction::Quit => "quit",
        }
    }

    /// Menu label shown next to the code.
    pub fn label(&self) -> &'static str {
        match self {
            SupplyAction::Play => "Play front piece (dequeue)",
            SupplyAction::Insert => "Insert new piece (enqueue)",
            SupplyAction::Reserve => "Reserve front piece (push)",
            SupplyAction::UseReserved => "Use reserved piece (pop)",
            SupplyAction::SwapFront => "Swap queue front with reserve top",
            SupplyAction::SwapThree => "Swap first 3 queued with the 3 reserved",
            SupplyAction::Show => "Show state",
            SupplyAction::Quit => "Quit",
        }
    }
}
