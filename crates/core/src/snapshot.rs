use crate::game_state::GameStatus;
use crate::grid::Grid;
use crate::types::Tile;

/// Read-only view of a game handed to the renderer for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub status: GameStatus,
    pub episode_id: u32,
    pub seed: u64,
    pub best_tile: Tile,
    pub empty_cells: usize,
}

impl GameSnapshot {
    pub fn from_grid(grid: Grid, status: GameStatus) -> Self {
        let best_tile = grid.max_tile();
        let empty_cells = grid.count_empty();
        Self {
            grid,
            status,
            episode_id: 0,
            seed: 0,
            best_tile,
            empty_cells,
        }
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
