//! Move dispatcher - maps a direction onto transpose/slide compositions

use crate::grid::Grid;
use crate::transform::{slide_left, slide_right, transpose};
use crate::types::Direction;

/// The grid produced by a move together with whether it differs from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    pub changed: bool,
}

/// Return the grid after sliding every tile in `direction`.
///
/// The input is never modified. No random tile is inserted.
///
/// ```
/// use tui_2048_core::{move_grid, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_rows(vec![vec![0, 2], vec![0, 2]]).unwrap();
/// let up = move_grid(&grid, Direction::Up);
/// assert_eq!(up.to_rows(), vec![vec![0, 4], vec![0, 0]]);
/// ```
pub fn move_grid(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Up => transpose(&slide_left(&transpose(grid))),
        Direction::Down => transpose(&slide_right(&transpose(grid))),
        Direction::Left => slide_left(grid),
        Direction::Right => slide_right(grid),
    }
}

/// Structural comparison used to decide whether a move took effect.
pub fn grids_equal(a: &Grid, b: &Grid) -> bool {
    a == b
}

/// Apply a move and report whether the board changed.
pub fn play_move(grid: &Grid, direction: Direction) -> MoveResult {
    let next = move_grid(grid, direction);
    let changed = !grids_equal(grid, &next);
    MoveResult {
        grid: next,
        changed,
    }
}
