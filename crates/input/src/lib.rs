//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`gridfall_types::GameAction`]s. One
//! discrete key press maps to at most one action, and the runner makes
//! exactly one engine call per action - there is no batching or auto-repeat
//! handling here.

pub mod map;

pub use gridfall_types as types;

pub use map::{map_key_event, should_quit};
