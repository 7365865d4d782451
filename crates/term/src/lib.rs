//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer and flushes it to the
//! terminal. No ratatui widgets or layout; every cell is placed by hand.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot to framebuffer (pure, unit-testable)
//! - [`renderer`]: framebuffer to terminal, with changed-run diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
