//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the member crates under `tetris_stack::{core,input,term,types}`
//! and hosts the line-oriented [`console`] front end shared by the binary and
//! the integration tests.

pub mod console;

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;
