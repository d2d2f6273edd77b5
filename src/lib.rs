//! Tile walker (workspace facade crate).
//!
//! Re-exports the workspace crates as `tile_walker::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tile_walker_core as core;
pub use tile_walker_input as input;
pub use tile_walker_term as term;
pub use tile_walker_types as types;
