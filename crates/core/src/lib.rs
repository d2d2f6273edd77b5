//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the map model and the movement rules. It has no
//! dependencies on terminal I/O or rendering, making it:
//!
//! - **Deterministic**: the same map and input sequence always end in the same position
//! - **Testable**: every rule is a synchronous function over owned state
//! - **Portable**: any renderer can pull [`GameSnapshot`]s and draw them
//!
//! # Module Structure
//!
//! - [`map`]: map text parsing into an immutable [`Grid`] and walkability queries
//! - [`movement`]: [`MovementController`], the single owner of the player position
//! - [`snapshot`]: the read-only per-frame view handed to renderers
//! - [`layout`]: centered world-space coordinates for grid cells
//!
//! # Movement Rules
//!
//! - The player spawns at `(1, 1)`
//! - Each input moves at most one tile in a cardinal direction
//! - A move commits only onto a floor tile inside the outer ring
//! - Blocked moves and unknown inputs are silent no-ops
//!
//! # Example
//!
//! ```
//! use tile_walker_core::{Grid, MovementController, SAMPLE_MAP};
//! use tile_walker_types::{Direction, PlayerState};
//!
//! let grid = Grid::parse(SAMPLE_MAP).unwrap();
//! let mut game = MovementController::new(grid).unwrap();
//!
//! game.handle_input(Direction::Right);
//! game.handle_input(Direction::Down);
//! assert_eq!(game.player(), PlayerState::new(2, 2));
//!
//! // Bumping into the top wall does nothing.
//! game.handle_input(Direction::Up);
//! assert_eq!(game.handle_input(Direction::Up), PlayerState::new(2, 1));
//! ```

pub mod layout;
pub mod map;
pub mod movement;
pub mod snapshot;

pub use tile_walker_types as types;

// Re-export commonly used types for convenience
pub use layout::world_position;
pub use map::{is_walkable, Grid, MapFormatError, SAMPLE_MAP};
pub use movement::{MovementController, StartupError};
pub use snapshot::GameSnapshot;
