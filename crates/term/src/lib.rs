//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: [`game_view`] composes the board
//! and the active piece into a plain [`fb::FrameBuffer`] (pure, unit
//! testable), and [`renderer`] flushes that framebuffer to a raw-mode
//! terminal. The engine is a read-only input here - nothing in this crate
//! mutates game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
