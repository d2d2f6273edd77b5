//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Direction`]s. Only the
//! arrow keys move the player; every other key is ignored, apart from the quit
//! keys recognised by [`should_quit`].

pub mod map;

pub use tile_walker_types as types;

pub use map::{handle_key_event, should_quit};
