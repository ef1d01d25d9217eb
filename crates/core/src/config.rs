//! Game configuration, loaded from environment variables.
//!
//! - `TUI_2048_SIZE`: grid side length (default 4, supported 2..=8)
//! - `TUI_2048_TWO_PROBABILITY`: chance a spawn is a 2 (default 0.5)
//! - `TUI_2048_SEED`: RNG seed; unset means a fresh random seed per run
//! - `TUI_2048_LOG_PATH`: file that receives log output

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::spawn::SpawnPolicy;
use crate::types::{DEFAULT_GRID_SIZE, DEFAULT_TWO_PROBABILITY};

pub const ENV_SIZE: &str = "TUI_2048_SIZE";
pub const ENV_TWO_PROBABILITY: &str = "TUI_2048_TWO_PROBABILITY";
pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_LOG_PATH: &str = "TUI_2048_LOG_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub size: usize,
    pub two_probability: f64,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            two_probability: DEFAULT_TWO_PROBABILITY,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read configuration from the process environment.
    ///
    /// Missing or unparseable values fall back to defaults. Range checks are
    /// left to [`GameConfig::validate`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let size = lookup(ENV_SIZE)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.size);

        let two_probability = lookup(ENV_TWO_PROBABILITY)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.two_probability);

        let seed = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok());

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            size,
            two_probability,
            seed,
            log_path,
        }
    }

    /// Check every value is usable, returning the spawn policy it describes.
    pub fn validate(&self) -> Result<SpawnPolicy, ConfigError> {
        Grid::new(self.size)?;
        SpawnPolicy::new(self.two_probability)
    }
}
