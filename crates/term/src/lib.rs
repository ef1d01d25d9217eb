//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It draws into a
//! plain framebuffer that is then flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep `GameView` pure so board layout can be unit-tested
//! - Only send changed cells to the terminal after the first frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
