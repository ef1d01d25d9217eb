//! Terminal check - detects boards where no move can change anything

use crate::grid::Grid;
use crate::types::{can_merge, Tile, EMPTY};

/// True when the grid is full and no two neighbours in a row or column can merge.
///
/// Any empty cell lets some slide move a tile, and any mergeable neighbour pair
/// lets some slide merge, so this is exactly "every direction is a no-op".
///
/// ```
/// use tui_2048_core::{is_game_over, Grid};
///
/// let stuck = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
/// assert!(is_game_over(&stuck));
///
/// let open = Grid::from_rows(vec![vec![2, 4], vec![4, 0]]).unwrap();
/// assert!(!is_game_over(&open));
/// ```
pub fn is_game_over(grid: &Grid) -> bool {
    if grid.cells().contains(&EMPTY) {
        return false;
    }

    if grid.rows().any(has_mergeable_neighbours) {
        return false;
    }

    let size = grid.size();
    let cells = grid.cells();
    for row in 0..size - 1 {
        let above = &cells[row * size..(row + 1) * size];
        let below = &cells[(row + 1) * size..(row + 2) * size];
        if above.iter().zip(below).any(|(&a, &b)| can_merge(a, b)) {
            return false;
        }
    }

    true
}

fn has_mergeable_neighbours(line: &[Tile]) -> bool {
    line.windows(2).any(|pair| can_merge(pair[0], pair[1]))
}
