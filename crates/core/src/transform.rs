//! Transform engine - the one-dimensional slide-and-merge rule plus transpose
//!
//! Every move reduces to sliding rows toward an edge. Vertical moves transpose
//! the grid first, slide horizontally, then transpose back, so all four
//! directions share the same merge logic.
//!
//! Rows are processed in stack-allocated [`Line`] buffers.

use std::iter;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{can_merge, Edge, Tile, EMPTY, MAX_GRID_SIZE};

/// A single row of tiles held on the stack.
pub type Line = ArrayVec<Tile, MAX_GRID_SIZE>;

/// Return a new grid where cell (r, c) holds the input's (c, r).
pub fn transpose(grid: &Grid) -> Grid {
    let size = grid.size();
    let cells = grid.cells();
    let mut out = Vec::with_capacity(cells.len());
    for row in 0..size {
        for col in 0..size {
            out.push(cells[col * size + row]);
        }
    }
    Grid::from_cells(size, out)
}

/// Slide one row toward `edge`, merging equal neighbours.
///
/// Tiles are scanned starting from the target edge. A tile merges into the
/// previously placed tile when both are equal and the previous one has not
/// already merged during this slide, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`
/// rather than `[8, 0, 0, 0]`. The result has the same length as `row`.
///
/// # Panics
///
/// Panics if `row` is longer than [`MAX_GRID_SIZE`]. Rows taken from a
/// [`Grid`] never are.
///
/// ```
/// use tui_2048_core::slide_toward;
/// use tui_2048_core::types::Edge;
///
/// assert_eq!(slide_toward(&[2, 0, 2, 4], Edge::Start).as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(slide_toward(&[2, 0, 2, 4], Edge::End).as_slice(), &[0, 0, 4, 4]);
/// ```
pub fn slide_toward(row: &[Tile], edge: Edge) -> Line {
    let merged = match edge {
        Edge::Start => merge_tiles(row.iter()),
        Edge::End => merge_tiles(row.iter().rev()),
    };
    let padding = iter::repeat(EMPTY).take(row.len() - merged.len());

    let mut line = Line::new();
    match edge {
        Edge::Start => {
            line.extend(merged);
            line.extend(padding);
        }
        Edge::End => {
            line.extend(padding);
            line.extend(merged.into_iter().rev());
        }
    }
    line
}

/// Compact non-empty tiles in scan order, merging each tile at most once.
fn merge_tiles<'a>(tiles: impl Iterator<Item = &'a Tile>) -> Line {
    let mut out = Line::new();
    let mut last_merged = false;

    for &tile in tiles.filter(|&&tile| tile != EMPTY) {
        match out.last_mut() {
            Some(last) if can_merge(*last, tile) && !last_merged => {
                *last = tile * 2;
                last_merged = true;
            }
            _ => {
                out.push(tile);
                last_merged = false;
            }
        }
    }

    out
}

/// Slide every row toward column 0.
pub fn slide_left(grid: &Grid) -> Grid {
    slide_rows(grid, Edge::Start)
}

/// Slide every row toward the last column.
pub fn slide_right(grid: &Grid) -> Grid {
    slide_rows(grid, Edge::End)
}

fn slide_rows(grid: &Grid, edge: Edge) -> Grid {
    let mut cells = Vec::with_capacity(grid.cells().len());
    for row in grid.rows() {
        cells.extend(slide_toward(row, edge));
    }
    Grid::from_cells(grid.size(), cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_TILE;

    fn slide(row: &[Tile], edge: Edge) -> Vec<Tile> {
        slide_toward(row, edge).to_vec()
    }

    #[test]
    fn test_basic_slide_both_edges() {
        assert_eq!(slide(&[2, 0, 2, 4], Edge::Start), vec![4, 4, 0, 0]);
        assert_eq!(slide(&[2, 0, 2, 4], Edge::End), vec![0, 0, 4, 4]);
    }

    #[test]
    fn test_tile_merges_once_per_slide() {
        assert_eq!(slide(&[2, 2, 2, 2], Edge::Start), vec![4, 4, 0, 0]);
        assert_eq!(slide(&[2, 2, 2, 2], Edge::End), vec![0, 0, 4, 4]);
        // The new 4 must not absorb the 4 that follows it.
        assert_eq!(slide(&[2, 2, 4, 0], Edge::Start), vec![4, 4, 0, 0]);
        assert_eq!(slide(&[4, 4, 8, 0], Edge::Start), vec![8, 8, 0, 0]);
    }

    #[test]
    fn test_merge_prefers_tiles_nearest_the_edge() {
        assert_eq!(slide(&[2, 2, 2, 0], Edge::Start), vec![4, 2, 0, 0]);
        assert_eq!(slide(&[2, 2, 2, 0], Edge::End), vec![0, 0, 2, 4]);
    }

    #[test]
    fn test_unequal_tiles_are_kept() {
        assert_eq!(slide(&[0, 2, 0, 4], Edge::Start), vec![2, 4, 0, 0]);
        assert_eq!(slide(&[2, 4, 8, 16], Edge::Start), vec![2, 4, 8, 16]);
        assert_eq!(slide(&[2, 4, 2, 4], Edge::End), vec![2, 4, 2, 4]);
    }

    #[test]
    fn test_merge_flag_resets_after_plain_append() {
        // 4 and 4 merge, 2 is appended and clears the flag, then 2 + 2 merge.
        assert_eq!(slide(&[4, 4, 2, 2], Edge::Start), vec![8, 4, 0, 0]);
    }

    #[test]
    fn test_largest_tiles_stay_separate() {
        let top = MAX_TILE;
        assert_eq!(slide(&[top, top], Edge::Start), vec![top, top]);
        assert_eq!(slide(&[0, top, 0, top], Edge::Start), vec![top, top, 0, 0]);
        assert_eq!(slide(&[top / 2, top / 2, top, 0], Edge::Start), vec![top, top, 0, 0]);

        let grid = Grid::from_rows(vec![vec![top, top], vec![0, 0]]).unwrap();
        let left = slide_left(&grid);
        assert_eq!(left, grid);
        assert_eq!(left.tile_sum(), grid.tile_sum());
        assert_eq!(slide_right(&grid), grid);
    }

    #[test]
    fn test_empty_and_full_rows() {
        assert_eq!(slide(&[0, 0, 0, 0], Edge::Start), vec![0, 0, 0, 0]);
        assert_eq!(slide(&[8, 8], Edge::End), vec![0, 16]);
    }

    #[test]
    fn test_slide_is_idempotent() {
        let rows: [[Tile; 4]; 5] = [
            [2, 2, 2, 2],
            [2, 0, 2, 4],
            [4, 4, 8, 8],
            [0, 2, 2, 2],
            [16, 0, 16, 32],
        ];
        for row in rows {
            for edge in [Edge::Start, Edge::End] {
                let once = slide_toward(&row, edge);
                let twice = slide_toward(&once, edge);
                assert_eq!(once, twice, "row {:?} edge {:?}", row, edge);
            }
        }
    }

    #[test]
    fn test_transpose_swaps_axes() {
        let grid = Grid::from_rows(vec![vec![2, 4], vec![8, 16]]).unwrap();
        let t = transpose(&grid);
        assert_eq!(t.to_rows(), vec![vec![2, 8], vec![4, 16]]);
        assert_eq!(transpose(&t), grid);
    }

    #[test]
    fn test_slide_left_and_right_grid() {
        let grid = Grid::from_rows(vec![vec![2, 2], vec![0, 4]]).unwrap();
        assert_eq!(slide_left(&grid).to_rows(), vec![vec![4, 0], vec![4, 0]]);
        assert_eq!(slide_right(&grid).to_rows(), vec![vec![0, 4], vec![0, 4]]);
    }
}
