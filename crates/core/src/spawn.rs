//! Spawner - random tile insertion
//!
//! A spawn picks one empty cell uniformly at random and places a 2 or a 4 in
//! it. The random source is always passed in, so a seeded `StdRng` makes games
//! fully reproducible.

use rand::Rng;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::types::{Tile, DEFAULT_TWO_PROBABILITY, SPAWN_HIGH, SPAWN_LOW};

/// How spawned tile values are chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPolicy {
    two_probability: f64,
}

impl SpawnPolicy {
    /// Create a policy that spawns a 2 with probability `two_probability`
    /// and a 4 otherwise.
    pub fn new(two_probability: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&two_probability) {
            return Err(ConfigError::TwoProbability(two_probability));
        }
        Ok(Self { two_probability })
    }

    pub fn two_probability(&self) -> f64 {
        self.two_probability
    }

    /// Draw the value of the next spawned tile.
    pub fn pick_value<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        if rng.gen_bool(self.two_probability) {
            SPAWN_LOW
        } else {
            SPAWN_HIGH
        }
    }
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            two_probability: DEFAULT_TWO_PROBABILITY,
        }
    }
}

/// Where a spawn landed and what it placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Place a random tile into `grid` in place.
///
/// Returns `None` and leaves the grid untouched when it has no empty cell.
pub fn place_random_tile<R: Rng + ?Sized>(
    grid: &mut Grid,
    policy: &SpawnPolicy,
    rng: &mut R,
) -> Option<Placement> {
    let empty = grid.count_empty();
    if empty == 0 {
        return None;
    }

    let index = rng.gen_range(0..empty);
    let (row, col) = grid.empty_cells().nth(index)?;
    let value = policy.pick_value(rng);
    grid.set(row, col, value);

    Some(Placement { row, col, value })
}

/// Return a copy of `grid` with one random tile added.
///
/// A full grid comes back unchanged.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tui_2048_core::{spawn_random_tile, Grid, SpawnPolicy};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let empty = Grid::new(4).unwrap();
/// let one = spawn_random_tile(&empty, &SpawnPolicy::default(), &mut rng);
/// assert_eq!(one.count_empty(), 15);
/// assert_eq!(empty.count_empty(), 16);
/// ```
pub fn spawn_random_tile<R: Rng + ?Sized>(grid: &Grid, policy: &SpawnPolicy, rng: &mut R) -> Grid {
    let mut next = grid.clone();
    place_random_tile(&mut next, policy, rng);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_policy_rejects_out_of_range() {
        assert!(SpawnPolicy::new(-0.1).is_err());
        assert!(SpawnPolicy::new(1.5).is_err());
        assert!(SpawnPolicy::new(f64::NAN).is_err());
        assert!(SpawnPolicy::new(0.9).is_ok());
        assert_eq!(SpawnPolicy::default().two_probability(), 0.5);
    }

    #[test]
    fn test_extreme_policies_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        let always_two = SpawnPolicy::new(1.0).unwrap();
        let always_four = SpawnPolicy::new(0.0).unwrap();
        for _ in 0..50 {
            assert_eq!(always_two.pick_value(&mut rng), SPAWN_LOW);
            assert_eq!(always_four.pick_value(&mut rng), SPAWN_HIGH);
        }
    }

    #[test]
    fn test_default_policy_produces_both_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let policy = SpawnPolicy::default();
        let mut twos = 0;
        let mut fours = 0;
        for _ in 0..1000 {
            match policy.pick_value(&mut rng) {
                SPAWN_LOW => twos += 1,
                SPAWN_HIGH => fours += 1,
                other => panic!("unexpected spawn value {}", other),
            }
        }
        // Even split: both should land well inside 400..600.
        assert!((400..600).contains(&twos), "twos = {}", twos);
        assert!((400..600).contains(&fours), "fours = {}", fours);
    }

    #[test]
    fn test_place_fills_only_empty_cell() {
        let mut grid = Grid::from_rows(vec![vec![2, 4], vec![8, 0]]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let placed = place_random_tile(&mut grid, &SpawnPolicy::default(), &mut rng).unwrap();
        assert_eq!((placed.row, placed.col), (1, 1));
        assert!(placed.value == 2 || placed.value == 4);
        assert_eq!(grid.get(1, 1), Some(placed.value));
        assert_eq!(grid.row(0), &[2, 4]);
        assert_eq!(grid.get(1, 0), Some(8));
    }

    #[test]
    fn test_full_grid_is_untouched() {
        let full = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let mut copy = full.clone();
        assert_eq!(place_random_tile(&mut copy, &SpawnPolicy::default(), &mut rng), None);
        assert_eq!(copy, full);
        assert_eq!(spawn_random_tile(&full, &SpawnPolicy::default(), &mut rng), full);
    }

    #[test]
    fn test_spawns_never_overwrite() {
        let mut rng = StdRng::seed_from_u64(99);
        let policy = SpawnPolicy::default();
        let mut grid = Grid::new(4).unwrap();

        for filled in 1..=16 {
            let before = grid.clone();
            grid = spawn_random_tile(&grid, &policy, &mut rng);
            assert_eq!(grid.count_empty(), 16 - filled);
            for (b, a) in before.cells().iter().zip(grid.cells()) {
                if *b != 0 {
                    assert_eq!(a, b);
                }
            }
        }
        assert!(grid.is_full());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let policy = SpawnPolicy::default();
        let empty = Grid::new(4).unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                spawn_random_tile(&empty, &policy, &mut a),
                spawn_random_tile(&empty, &policy, &mut b)
            );
        }
    }
}
