//! World-space placement of grid cells.
//!
//! Centers the grid on the origin with +y pointing up, so row 0 ends up at the
//! top. Cell size is one world unit.

use crate::map::Grid;

/// World position of the centre of cell (x, y).
///
/// # Examples
///
/// ```
/// use tile_walker_core::layout::world_position;
/// use tile_walker_core::map::Grid;
///
/// let grid = Grid::parse("# # #\n# · #\n# # #").unwrap();
/// assert_eq!(world_position(&grid, 1, 1), (0.0, 0.0));
/// assert_eq!(world_position(&grid, 0, 0), (-1.0, 1.0));
/// ```
pub fn world_position(grid: &Grid, x: i32, y: i32) -> (f32, f32) {
    let half_w = (grid.width() as f32 - 1.0) / 2.0;
    let half_h = (grid.height() as f32 - 1.0) / 2.0;
    (x as f32 - half_w, half_h - y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::SAMPLE_MAP;

    #[test]
    fn even_sized_grid_has_half_unit_offsets() {
        let grid = Grid::parse(SAMPLE_MAP).unwrap();
        assert_eq!(world_position(&grid, 0, 0), (-5.5, 4.5));
        assert_eq!(world_position(&grid, 11, 9), (5.5, -4.5));
    }

    #[test]
    fn moving_down_lowers_world_y() {
        let grid = Grid::parse(SAMPLE_MAP).unwrap();
        let (_, top) = world_position(&grid, 1, 1);
        let (_, below) = world_position(&grid, 1, 2);
        assert!(below < top);
    }
}
