//! Game state module - owns the board and drives the Playing/GameOver lifecycle
//!
//! This module ties together the grid, move dispatcher, spawner and terminal
//! check. Each effective move is followed by exactly one spawn; a move that
//! leaves the board unchanged does nothing at all.

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::moves::play_move;
use crate::snapshot::GameSnapshot;
use crate::spawn::{place_random_tile, Placement, SpawnPolicy};
use crate::terminal::is_game_over;
use crate::types::{Direction, GameAction, INITIAL_TILES};

/// Lifecycle of one game. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// What a single move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub changed: bool,
    pub spawned: Option<Placement>,
    pub status: GameStatus,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    policy: SpawnPolicy,
    rng: StdRng,
    status: GameStatus,
    /// Seed the RNG was created from (reported so a game can be replayed).
    seed: u64,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Create a new game: empty grid plus the initial random tiles.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let policy = config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let grid = Grid::new(config.size)?;

        let mut state = Self::with_grid(grid, policy, seed);
        state.seed_initial_tiles();
        Ok(state)
    }

    /// Resume from an existing grid without seeding any tiles.
    pub fn with_grid(grid: Grid, policy: SpawnPolicy, seed: u64) -> Self {
        let status = status_of(&grid);
        Self {
            grid,
            policy,
            rng: StdRng::seed_from_u64(seed),
            status,
            seed,
            episode_id: 0,
        }
    }

    fn seed_initial_tiles(&mut self) {
        for _ in 0..INITIAL_TILES {
            place_random_tile(&mut self.grid, &self.policy, &mut self.rng);
        }
        self.status = status_of(&self.grid);
        info!(
            "new game: episode={} size={} seed={}",
            self.episode_id,
            self.grid.size(),
            self.seed
        );
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn policy(&self) -> &SpawnPolicy {
        &self.policy
    }

    /// Slide the board in `direction`.
    ///
    /// When the board changes a single tile is spawned and the terminal check
    /// runs. Ignored once the game is over.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.game_over() {
            return MoveOutcome {
                changed: false,
                spawned: None,
                status: self.status,
            };
        }

        let result = play_move(&self.grid, direction);
        if !result.changed {
            debug!("move {}: no change", direction.as_str());
            return MoveOutcome {
                changed: false,
                spawned: None,
                status: self.status,
            };
        }

        self.grid = result.grid;
        let spawned = place_random_tile(&mut self.grid, &self.policy, &mut self.rng);
        if let Some(p) = spawned {
            debug!(
                "move {}: spawned {} at ({}, {})",
                direction.as_str(),
                p.value,
                p.row,
                p.col
            );
        }

        self.status = status_of(&self.grid);
        if self.game_over() {
            info!(
                "game over: episode={} best_tile={}",
                self.episode_id,
                self.grid.max_tile()
            );
        }

        MoveOutcome {
            changed: true,
            spawned,
            status: self.status,
        }
    }

    /// Start over on an empty grid of the same size.
    ///
    /// The RNG keeps running, so consecutive episodes differ.
    pub fn restart(&mut self) {
        self.grid = Grid::from_cells(self.grid.size(), vec![0; self.grid.cells().len()]);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.seed_initial_tiles();
    }

    /// Apply an input action. Returns the move outcome for moves.
    pub fn apply_action(&mut self, action: GameAction) -> Option<MoveOutcome> {
        match action {
            GameAction::Move(direction) => Some(self.apply_move(direction)),
            GameAction::Restart => {
                self.restart();
                None
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::from_grid(self.grid.clone(), self.status);
        snap.episode_id = self.episode_id;
        snap.seed = self.seed;
        snap
    }
}

fn status_of(grid: &Grid) -> GameStatus {
    if is_game_over(grid) {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    }
}
