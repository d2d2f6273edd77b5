//! Movement controller - owns the grid and the player position
//!
//! A move is committed only when the target tile is walkable *and* lies in the
//! interior `[1, width-2] x [1, height-2]`. Anything else is a silent no-op:
//! bumping into a wall does nothing.

use crate::map::Grid;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, PlayerState, SPAWN};

/// Map layouts the controller refuses to start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StartupError {
    #[error("outer ring tile ({x}, {y}) is not a wall")]
    BorderNotWall { x: i32, y: i32 },

    #[error("spawn ({x}, {y}) is not a walkable interior tile")]
    SpawnNotWalkable { x: i32, y: i32 },
}

/// Player movement over a fixed grid
#[derive(Debug, Clone)]
pub struct MovementController {
    grid: Grid,
    player: PlayerState,
}

impl MovementController {
    /// Create a controller with the player at the fixed spawn `(1, 1)`.
    pub fn new(grid: Grid) -> Result<Self, StartupError> {
        Self::with_spawn(grid, SPAWN)
    }

    /// Create a controller with the player at `spawn`.
    ///
    /// The grid's outer ring must be entirely wall and the spawn must be a
    /// walkable interior tile.
    pub fn with_spawn(grid: Grid, spawn: PlayerState) -> Result<Self, StartupError> {
        if let Some(((x, y), _)) = grid
            .tiles()
            .find(|&((x, y), tile)| grid.is_border(x as i32, y as i32) && tile.is_walkable())
        {
            return Err(StartupError::BorderNotWall {
                x: x as i32,
                y: y as i32,
            });
        }

        if !Self::is_interior(&grid, spawn) || !grid.is_walkable(spawn.x, spawn.y) {
            return Err(StartupError::SpawnNotWalkable {
                x: spawn.x,
                y: spawn.y,
            });
        }

        Ok(Self {
            grid,
            player: spawn,
        })
    }

    fn is_interior(grid: &Grid, pos: PlayerState) -> bool {
        let max_x = grid.width() as i32 - 2;
        let max_y = grid.height() as i32 - 2;
        (1..=max_x).contains(&pos.x) && (1..=max_y).contains(&pos.y)
    }

    /// Check whether the player may step onto `pos`
    pub fn can_enter(&self, pos: PlayerState) -> bool {
        self.grid.is_walkable(pos.x, pos.y) && Self::is_interior(&self.grid, pos)
    }

    /// Step one tile in `direction` if the target allows it.
    ///
    /// Returns the player position after the input, which equals the previous
    /// one when the move was blocked.
    pub fn handle_input(&mut self, direction: Direction) -> PlayerState {
        let candidate = self.player.offset(direction.delta());
        if self.can_enter(candidate) {
            tracing::debug!(
                direction = direction.as_str(),
                x = candidate.x,
                y = candidate.y,
                "player moved"
            );
            self.player = candidate;
        } else {
            tracing::trace!(
                direction = direction.as_str(),
                x = candidate.x,
                y = candidate.y,
                "move blocked"
            );
        }
        self.player
    }

    /// Handle a browser-style key name such as `"ArrowLeft"`.
    ///
    /// Keys that are not arrows leave the position unchanged.
    pub fn handle_key_name(&mut self, key: &str) -> PlayerState {
        match Direction::from_key_name(key) {
            Some(direction) => self.handle_input(direction),
            None => self.player,
        }
    }

    pub fn player(&self) -> PlayerState {
        self.player
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Everything a renderer needs for one frame.
    pub fn current_state(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            grid: &self.grid,
            player: self.player,
        }
    }
}
