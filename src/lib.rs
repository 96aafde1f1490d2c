//! Gridfall (workspace facade crate).
//!
//! Re-exports the member crates under one roof so integration tests and
//! downstream users can reach everything through `gridfall::{core,...}`.

pub use gridfall_core as core;
pub use gridfall_input as input;
pub use gridfall_term as term;
pub use gridfall_types as types;
