//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid model, the slide-and-merge engine, the
//! spawner and the game-over check. It has **no dependencies** on terminal
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a pure function over a [`Grid`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: N x N tile grid with bounds-checked access
//! - [`transform`]: `transpose` plus the one-dimensional slide-and-merge rule
//! - [`moves`]: maps a [`Direction`](types::Direction) onto transpose/slide compositions
//! - [`spawn`]: random 2/4 insertion into an empty cell
//! - [`terminal`]: detects boards where no move can change anything
//! - [`game_state`]: Playing/GameOver lifecycle around one owned grid
//! - [`config`]: environment-driven settings
//!
//! # Game Rules
//!
//! - **Slide**: every tile travels as far as it can toward the chosen edge
//! - **Merge**: two equal tiles meeting become one tile of double value
//! - **Merge once**: a tile created by a merge cannot merge again in the same move
//! - **Spawn**: after a move that changed the board, one 2 or 4 appears in a random empty cell
//! - **Game over**: the board is full and no row or column has two equal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{is_game_over, move_grid, Grid};
//! use tui_2048_core::types::Direction;
//!
//! let grid = Grid::from_rows(vec![
//!     vec![0, 0, 2, 2],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//! ])
//! .unwrap();
//!
//! let next = move_grid(&grid, Direction::Left);
//! assert_eq!(next.row(0), &[4, 0, 0, 0]);
//! assert_ne!(next, grid);
//! assert!(!is_game_over(&next));
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod moves;
pub mod snapshot;
pub mod spawn;
pub mod terminal;
pub mod transform;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{ConfigError, GridError};
pub use game_state::{GameState, GameStatus, MoveOutcome};
pub use grid::Grid;
pub use moves::{grids_equal, move_grid, play_move, MoveResult};
pub use snapshot::GameSnapshot;
pub use spawn::{place_random_tile, spawn_random_tile, Placement, SpawnPolicy};
pub use terminal::is_game_over;
pub use transform::{slide_left, slide_right, slide_toward, transpose, Line};
