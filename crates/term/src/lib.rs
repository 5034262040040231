//! Terminal rendering for the piece supply.
//!
//! Rendering is split in two steps: [`SupplyView`] draws a snapshot into a
//! plain [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`] flushes
//! that framebuffer to the terminal through crossterm. The [`text`] module
//! formats the same state as plain lines for the console front end.

pub mod fb;
pub mod renderer;
pub mod supply_view;
pub mod text;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use supply_view::{AnchorY, SupplyView, Viewport};
pub use text::{
    describe_event, describe_failure, format_queue, format_reserve, format_state, menu_lines,
    MENU_TITLE,
};
