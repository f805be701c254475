//! Block drop (workspace facade crate).
//!
//! Re-exports the member crates under `block_drop::{core,term,types}` and
//! adds the action-script helpers the command-line runner is built on.

pub use block_drop_core as core;
pub use block_drop_term as term;
pub use block_drop_types as types;

pub mod script;
