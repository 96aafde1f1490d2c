//! Core rules engine - pure, deterministic, and testable.
//!
//! This crate holds all game rules and state. It has **zero dependencies** on
//! UI or I/O, so the whole engine can be driven headlessly from tests:
//!
//! - [`shape`]: piece shape matrices and the quarter-turn rotation transform
//! - [`board`]: the settled grid, with occupancy checks and line clearing
//! - [`engine`]: the Running/Over state machine tying it all together
//! - [`rng`]: injectable piece randomness (scriptable in tests)
//!
//! # Example
//!
//! ```
//! use gridfall_core::{GameEngine, SimpleRng};
//! use gridfall_types::Direction;
//!
//! let mut game = GameEngine::new(Box::new(SimpleRng::new(42)));
//! game.attempt_move(Direction::Left);
//! game.attempt_rotate();
//! game.tick(); // gravity step
//! assert!(!game.is_over());
//! ```

pub mod board;
pub mod engine;
pub mod rng;
pub mod shape;

pub use gridfall_types as types;

pub use board::Board;
pub use engine::{ActivePiece, GameEngine, Phase};
pub use rng::{PiecePicker, SequencePicker, SimpleRng};
pub use shape::Shape;
