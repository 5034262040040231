//! Input module.
//!
//! Turns user input into [`crate::types::SupplyAction`]s. Two front ends feed
//! the same session: the raw-mode terminal view delivers `crossterm` key
//! events ([`map`]), and the line-oriented console delivers typed menu codes
//! ([`line`]).

pub mod line;
pub mod map;

pub use tetris_stack_types as types;

pub use line::{parse_choice, InputError};
pub use map::{handle_key_event, should_quit};
