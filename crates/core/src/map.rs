//! Map module - parses map text into an immutable tile grid
//!
//! The grid is stored as a flat row-major vector (`y * width + x`).
//! Coordinates: (x, y) where x is the column (left to right) and y is the row,
//! with row 0 being the first line of the map text.

use std::str::FromStr;

use crate::types::TileType;

/// The map the game ships with: a 12x10 room, walls on the outer ring and
/// floor everywhere inside.
pub const SAMPLE_MAP: &str = "
# # # # # # # # # # # #
# · · · · · · · · · · #
# · · · · · · · · · · #
# · · · · · · · · · · #
# · · · · · · · · · · #
# · · · · · · · · · · #
# · · · · · · · · · · #
# · · · · · · · · · · #
# · · · · · · · · · · #
# # # # # # # # # # # #
";

/// Malformed map text. Row and column indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapFormatError {
    #[error("map text contains no rows")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        row: usize,
        column: usize,
        symbol: String,
    },
}

/// Immutable grid of tiles, `width` columns by `height` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileType>,
}

impl Grid {
    /// Parse map text into a grid.
    ///
    /// Blank lines around the map are ignored. Each remaining line is trimmed
    /// and split on single spaces; every token must be a known tile symbol and
    /// every row must have as many tokens as the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_walker_core::map::{Grid, MapFormatError};
    ///
    /// let grid = Grid::parse("# # #\n# · #\n# # #").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 3));
    ///
    /// assert_eq!(Grid::parse("   \n"), Err(MapFormatError::Empty));
    /// ```
    pub fn parse(text: &str) -> Result<Self, MapFormatError> {
        let body = text.trim();
        if body.is_empty() {
            return Err(MapFormatError::Empty);
        }

        let mut width = 0;
        let mut height = 0;
        let mut tiles = Vec::new();

        for (row, line) in body.lines().enumerate() {
            let mut found = 0;
            for (column, token) in line.trim().split(' ').enumerate() {
                let tile = TileType::from_symbol(token).ok_or_else(|| {
                    MapFormatError::UnknownSymbol {
                        row,
                        column,
                        symbol: token.to_string(),
                    }
                })?;
                tiles.push(tile);
                found += 1;
            }

            if row == 0 {
                width = found;
            } else if found != width {
                return Err(MapFormatError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        tracing::debug!(width, height, "parsed map");
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Width of the grid in columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in rows
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Check if (x, y) lies inside `[0, width) x [0, height)`
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Tiles of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[TileType]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.tiles[start..start + self.width])
    }

    /// All tiles with their `(x, y)` coordinate, in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = ((usize, usize), TileType)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &tile)| ((i % width, i / width), tile))
    }

    /// Check if (x, y) is in bounds and not a wall
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|tile| tile.is_walkable())
    }

    /// Check if (x, y) is on the outermost row or column
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        self.contains(x, y)
            && (x == 0
                || y == 0
                || x as usize == self.width - 1
                || y as usize == self.height - 1)
    }
}

impl FromStr for Grid {
    type Err = MapFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Free-standing walkability query, see [`Grid::is_walkable`].
pub fn is_walkable(grid: &Grid, x: i32, y: i32) -> bool {
    grid.is_walkable(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_map_is_twelve_by_ten() {
        let grid = Grid::parse(SAMPLE_MAP).unwrap();
        assert_eq!(grid.width(), 12);
        assert_eq!(grid.height(), 10);
    }

    #[test]
    fn flat_index_is_row_major() {
        let grid = Grid::parse("# ·\n· #").unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(1, 0), Some(1));
        assert_eq!(grid.index(0, 1), Some(2));
        assert_eq!(grid.index(1, 1), Some(3));
        assert_eq!(grid.index(2, 0), None);
        assert_eq!(grid.index(0, -1), None);
    }

    #[test]
    fn lines_are_trimmed_before_splitting() {
        let grid = Grid::parse("\n\n   # # #  \n\t# · #\n# # #   \n\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.get(1, 1), Some(TileType::Floor));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let grid = Grid::parse("# # #\r\n# · #\r\n# # #\r\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
    }

    #[test]
    fn double_space_yields_empty_token() {
        let err = Grid::parse("#  #").unwrap_err();
        assert_eq!(
            err,
            MapFormatError::UnknownSymbol {
                row: 0,
                column: 1,
                symbol: String::new(),
            }
        );
    }

    #[test]
    fn interior_blank_line_is_rejected() {
        let err = Grid::parse("# #\n\n# #").unwrap_err();
        assert!(matches!(err, MapFormatError::UnknownSymbol { row: 1, .. }));
    }

    #[test]
    fn ragged_row_reports_position() {
        let err = Grid::parse("# # #\n# · #\n# #").unwrap_err();
        assert_eq!(
            err,
            MapFormatError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn border_detection() {
        let grid = Grid::parse(SAMPLE_MAP).unwrap();
        assert!(grid.is_border(0, 5));
        assert!(grid.is_border(11, 0));
        assert!(grid.is_border(4, 9));
        assert!(!grid.is_border(1, 1));
        assert!(!grid.is_border(12, 0));
    }

    #[test]
    fn error_messages_are_readable() {
        let err = MapFormatError::UnknownSymbol {
            row: 2,
            column: 4,
            symbol: "X".to_string(),
        };
        assert_eq!(err.to_string(), "unknown symbol \"X\" at row 2, column 4");
    }
}
