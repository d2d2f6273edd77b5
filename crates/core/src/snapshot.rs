use crate::map::Grid;
use crate::types::{PlayerState, TileType};

/// Read-only view of one frame: the grid and where the player stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot<'a> {
    pub grid: &'a Grid,
    pub player: PlayerState,
}

impl GameSnapshot<'_> {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// All tiles with their `(x, y)` coordinate, in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = ((usize, usize), TileType)> + '_ {
        self.grid.tiles()
    }

    /// Player position as an unsigned cell index, or `None` if negative
    pub fn player_cell(&self) -> Option<(usize, usize)> {
        let x = usize::try_from(self.player.x).ok()?;
        let y = usize::try_from(self.player.y).ok()?;
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::SAMPLE_MAP;

    #[test]
    fn player_cell_rejects_negative_coordinates() {
        let grid = Grid::parse(SAMPLE_MAP).unwrap();
        let snap = GameSnapshot {
            grid: &grid,
            player: PlayerState::new(3, 2),
        };
        assert_eq!(snap.player_cell(), Some((3, 2)));

        let off_grid = GameSnapshot {
            player: PlayerState::new(-1, 2),
            ..snap
        };
        assert_eq!(off_grid.player_cell(), None);
    }
}
