//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a square grid of `N x N` tiles:
//!
//! - **Default**: 4x4 (the classic layout)
//! - **Supported**: 2x2 up to 8x8
//!
//! # Spawn Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_LOW` | 2 | Common spawned tile |
//! | `SPAWN_HIGH` | 4 | Less common spawned tile |
//! | `DEFAULT_TWO_PROBABILITY` | 0.5 | Chance a spawn is a 2 |
//! | `INITIAL_TILES` | 2 | Tiles seeded before the first move |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_GRID_SIZE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.as_str(), "left");
//!
//! let action = GameAction::Move(Direction::Up);
//! assert_eq!(action.direction(), Some(Direction::Up));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// A single cell value: `0` is empty, anything else is a power of two.
pub type Tile = u32;

/// The empty tile.
pub const EMPTY: Tile = 0;

/// Side length of the classic board (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest supported side length
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported side length.
///
/// Rows are processed in fixed-capacity stack buffers of this size.
pub const MAX_GRID_SIZE: usize = 8;

/// Value of the common spawned tile
pub const SPAWN_LOW: Tile = 2;

/// Value of the less common spawned tile
pub const SPAWN_HIGH: Tile = 4;

/// Probability that a spawn produces [`SPAWN_LOW`] rather than [`SPAWN_HIGH`].
///
/// The classic desktop version picks between the two with an even split.
pub const DEFAULT_TWO_PROBABILITY: f64 = 0.5;

/// Number of tiles placed on an empty board before the first move
pub const INITIAL_TILES: usize = 2;

/// Tile value highlighted as the goal. Reaching it does not end the game.
pub const WIN_TILE: Tile = 2048;

/// Largest tile a merge can produce. Two of these never merge.
pub const MAX_TILE: Tile = 1 << 31;

/// Returns true if `tile` is empty or a positive power of two.
pub fn is_valid_tile(tile: Tile) -> bool {
    tile == EMPTY || tile.is_power_of_two()
}

/// Returns true if two neighbouring tiles combine into one on a slide.
///
/// Equal non-empty tiles merge unless their sum would exceed [`MAX_TILE`].
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a != EMPTY && a == b && a < MAX_TILE
}


/// The four directions tiles can be pushed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Which end of a row tiles are pushed toward.
///
/// - **Start**: column 0 (a left slide)
/// - **End**: column N-1 (a right slide)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Start,
    End,
}

/// Game actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge every tile in a direction
    Move(Direction),
    /// Throw away the current board and start a new one
    Restart,
}

impl GameAction {
    /// The direction carried by a move, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Move(dir) => Some(*dir),
            GameAction::Restart => None,
        }
    }
}
