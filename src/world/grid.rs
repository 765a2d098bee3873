//! Static tile map the rays are cast against.

use std::ops::Index;

use once_cell::sync::Lazy;
use thiserror::Error;

/// Tile value stored in a grid cell. `0` is open floor, anything else is a
/// wall whose value also picks the texture (`tile - 1`).
pub type TileId = u16;

/// Open floor.
pub const EMPTY: TileId = 0;

/// Things that can go wrong while building a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows without cells.
    #[error("grid has no cells")]
    Empty,

    /// Row `row` has `found` cells, the first row has `expected`.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular tile map, `width` cells along X and `height` along Y.
///
/// Storage is row-major (`tiles[y * width + x]`).
///
/// Rays are only guaranteed to hit something when the outer ring of cells
/// is solid; see [`Grid::is_bordered`]. A ray that walks off an open edge
/// simply reports no hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileId>,
}

impl Grid {
    /// Build a grid from rows of tiles, `rows[y][x]`.
    pub fn from_rows<R: AsRef<[TileId]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            tiles.extend_from_slice(cells);
        }

        Ok(Self {
            width,
            height: rows.len(),
            tiles,
        })
    }

    /// The 24×24 demo level.
    pub fn reference() -> &'static Grid {
        &REFERENCE
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<TileId> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    /// Tile under a world-space point (integer part selects the cell).
    #[inline]
    pub fn tile_at(&self, x: f64, y: f64) -> Option<TileId> {
        self.get(x.floor() as i32, y.floor() as i32)
    }

    /// `true` only for an in-bounds cell holding [`EMPTY`].
    ///
    /// Tests the id against zero exactly; out-of-bounds counts as solid.
    #[inline]
    pub fn is_traversable(&self, x: f64, y: f64) -> bool {
        self.tile_at(x, y) == Some(EMPTY)
    }

    /// `true` if every cell on the outer ring is a wall.
    pub fn is_bordered(&self) -> bool {
        let (w, h) = (self.width as i32, self.height as i32);
        let row_ok = |y| (0..w).all(|x| self.get(x, y).is_some_and(|t| t != EMPTY));
        let col_ok = |x| (0..h).all(|y| self.get(x, y).is_some_and(|t| t != EMPTY));
        row_ok(0) && row_ok(h - 1) && col_ok(0) && col_ok(w - 1)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = TileId;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &TileId {
        debug_assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of grid");
        &self.tiles[y * self.width + x]
    }
}

/// Demo level, indexed `[x][y]`: each literal line is one column of cells.
#[rustfmt::skip]
const REFERENCE_COLUMNS: [[TileId; 24]; 24] = [
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,2,2,2,2,2,0,0,0,0,3,0,3,0,3,0,0,0,1],
    [1,0,0,0,0,0,2,0,0,0,2,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,2,0,0,0,2,0,0,0,0,3,0,0,0,3,0,0,0,1],
    [1,0,0,0,0,0,2,0,0,0,2,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,2,2,0,2,2,0,0,0,0,3,0,3,0,3,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,4,4,4,4,4,4,4,4,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,4,0,4,0,0,0,0,4,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,4,0,0,0,0,5,0,4,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,4,0,4,0,0,0,0,4,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,4,0,4,4,4,4,4,4,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,4,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,4,4,4,4,4,4,4,4,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
];

static REFERENCE: Lazy<Grid> = Lazy::new(|| Grid {
    width: 24,
    height: 24,
    tiles: (0..24)
        .flat_map(|y| REFERENCE_COLUMNS.iter().map(move |column| column[y]))
        .collect(),
});

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_bad_shapes() {
        let empty: [[TileId; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&empty).unwrap_err(), GridError::Empty);

        let ragged: [&[TileId]; 2] = [&[1, 1, 1], &[1, 1]];
        assert_eq!(
            Grid::from_rows(&ragged).unwrap_err(),
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn lookup_is_x_then_y() {
        let g = Grid::from_rows(&[[1u16, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.get(2, 0), Some(3));
        assert_eq!(g.get(0, 1), Some(4));
        assert_eq!(g[(1, 1)], 5);
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.get(-1, 0), None);
    }

    #[test]
    fn traversable_means_exactly_zero() {
        let g = Grid::from_rows(&[[1u16, 1, 1], [1, 0, 7], [1, 1, 1]]).unwrap();
        assert!(g.is_traversable(1.5, 1.5));
        assert!(!g.is_traversable(2.5, 1.5));
        assert!(!g.is_traversable(-0.5, 1.5));
        assert!(!g.is_traversable(1.5, 3.2));
    }

    #[test]
    fn border_detection() {
        assert!(Grid::reference().is_bordered());
        let open = Grid::from_rows(&[[1u16, 1, 1], [0, 0, 1], [1, 1, 1]]).unwrap();
        assert!(!open.is_bordered());
    }

    #[test]
    fn reference_start_cell_is_open() {
        let g = Grid::reference();
        assert_eq!((g.width(), g.height()), (24, 24));
        assert!(g.is_traversable(22.0, 12.0));
    }

    #[test]
    fn reference_literal_is_indexed_x_first() {
        let g = Grid::reference();
        // green room wall and the pillar inside the white maze
        assert_eq!(g.get(4, 6), Some(2));
        assert_eq!(g.get(18, 6), Some(5));
        assert_eq!(g.get(6, 4), Some(0));
        assert_eq!(g.get(4, 10), Some(2));
        assert_eq!(g.get(16, 1), Some(4));
        assert_eq!(g.get(1, 16), Some(0));
    }
}
