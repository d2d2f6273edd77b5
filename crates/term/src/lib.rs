//! Terminal rendering for the tile map.
//!
//! A small game-oriented rendering layer: [`MapView`] turns a
//! [`core::GameSnapshot`] into a [`FrameBuffer`] of styled characters and
//! [`TerminalRenderer`] flushes frames to the terminal.
//!
//! Goals:
//! - Keep `core` free of any rendering concern
//! - Pull state once per frame instead of reacting to mutations
//! - Control the aspect ratio (2 chars wide per map cell by default)

pub mod fb;
pub mod map_view;
pub mod renderer;

pub use tile_walker_core as core;
pub use tile_walker_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use map_view::{AnchorY, MapView, Viewport, FLOOR_GLYPH, PLAYER_GLYPH, WALL_GLYPH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
