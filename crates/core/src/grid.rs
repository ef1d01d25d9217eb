//! Grid module - the square board of tiles
//!
//! The grid is an `N x N` square where each cell is empty (`0`) or holds a power of two.
//! Cells are stored in a flat row-major vector for cache locality.
//! Coordinates: (row, col), both 0-indexed, row 0 at the top and col 0 on the left.
//!
//! The side length is fixed when the grid is built and never changes afterwards.

use std::fmt;

use crate::error::GridError;
use crate::types::{is_valid_tile, Tile, EMPTY, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// The game board - `size x size` tiles using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of tiles, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid of the given side length
    pub fn new(size: usize) -> Result<Self, GridError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![EMPTY; size * size],
        })
    }

    /// Build a grid from nested rows.
    ///
    /// Fails if the rows do not form a supported square or a tile is neither
    /// zero nor a power of two.
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(grid.get(1, 1), Some(4));
    ///
    /// assert!(Grid::from_rows(vec![vec![2, 0, 0], vec![0, 4]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Assemble a grid from cells the engine already knows to be well-formed.
    pub(crate) fn from_cells(size: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds or the value is not a valid tile
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        if !is_valid_tile(tile) {
            return false;
        }
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// One row as a slice. Panics if `row >= size`.
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Iterate the tiles of one column top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().skip(col).step_by(self.size).copied()
    }

    /// Get a reference to the flat row-major cells
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Positions of every empty cell, in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == EMPTY)
            .map(move |(idx, _)| (idx / size, idx % size))
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile == EMPTY).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&tile| tile != EMPTY)
    }

    /// Highest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of every tile value
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&tile| u64::from(tile)).sum()
    }

    /// Convert to nested rows for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }
}

fn check_size(size: usize) -> Result<(), GridError> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GridError::UnsupportedSize {
            size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if *tile == EMPTY {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", tile)?;
                }
            }
        }
        Ok(())
    }
}
