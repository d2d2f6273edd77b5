//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! from the map model, the input mapping and the terminal renderer alike.
//!
//! # Map Symbols
//!
//! Maps are written one row per line with single-space separated tokens:
//!
//! | Symbol | Tile |
//! |--------|------|
//! | `#` | [`TileType::Wall`] |
//! | `·` (U+00B7) | [`TileType::Floor`] |
//!
//! # Coordinates
//!
//! Grid coordinates are `(x, y)` with `x` the column and `y` the row. Row 0 is
//! the first line of the map text, so [`Direction::Up`] decreases `y`.
//!
//! # Examples
//!
//! ```
//! use tile_walker_types::{Direction, PlayerState, TileType, SPAWN};
//!
//! assert_eq!(TileType::from_symbol("#"), Some(TileType::Wall));
//! assert_eq!(TileType::from_symbol("X"), None);
//!
//! let moved = SPAWN.offset(Direction::Right.delta());
//! assert_eq!(moved, PlayerState::new(2, 1));
//! ```

/// Map symbol for a wall tile
pub const WALL_SYMBOL: &str = "#";

/// Map symbol for a floor tile (middle dot, U+00B7)
pub const FLOOR_SYMBOL: &str = "·";

/// Fixed player spawn coordinate
pub const SPAWN: PlayerState = PlayerState { x: 1, y: 1 };

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Wall,
    Floor,
}

impl TileType {
    /// Parse a tile from its map token
    ///
    /// Only the exact symbols are accepted; there is no case folding or
    /// trimming here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_walker_types::TileType;
    ///
    /// assert_eq!(TileType::from_symbol("·"), Some(TileType::Floor));
    /// assert_eq!(TileType::from_symbol("."), None);
    /// ```
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            WALL_SYMBOL => Some(TileType::Wall),
            FLOOR_SYMBOL => Some(TileType::Floor),
            _ => None,
        }
    }

    /// The map token for this tile
    pub fn symbol(&self) -> &'static str {
        match self {
            TileType::Wall => WALL_SYMBOL,
            TileType::Floor => FLOOR_SYMBOL,
        }
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor)
    }
}

/// The four movement directions
///
/// Deltas are in grid space: rows grow downwards, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` in grid coordinates
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_walker_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a browser-style key name (`"ArrowUp"` etc.)
    ///
    /// Returns `None` for anything that is not an arrow key.
    pub fn from_key_name(s: &str) -> Option<Self> {
        match s {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Current grid coordinate of the player marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerState {
    pub x: i32,
    pub y: i32,
}

impl PlayerState {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`
    pub fn offset(&self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        SPAWN
    }
}
