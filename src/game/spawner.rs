use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::Board;

/// Exponent written for the common spawn (tile 2).
pub const LOW_SPAWN: u8 = 1;
/// Exponent written for the rare spawn (tile 4).
pub const HIGH_SPAWN: u8 = 2;
/// Percentage of spawns that use `LOW_SPAWN`.
pub const LOW_SPAWN_PERCENT: u32 = 80;

/// Places new tiles into empty cells using an injected random source.
#[derive(Debug, Clone)]
pub struct RandomSpawner<R: Rng = StdRng> {
    rng: R,
}

impl RandomSpawner<StdRng> {
    /// Spawner seeded from OS entropy
    pub fn from_entropy() -> Self {
        RandomSpawner {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic spawner for reproducible games
    pub fn seeded(seed: u64) -> Self {
        RandomSpawner {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSpawner<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RandomSpawner<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomSpawner { rng }
    }

    /// Fill up to `count` distinct empty cells and return how many were written.
    ///
    /// When `count` exceeds the number of empty cells it is clamped to one
    /// fewer than the empty count, so a request that cannot be satisfied in
    /// full never fills the board.
    pub fn spawn(&mut self, board: &mut Board, count: usize) -> usize {
        let empty = board.empty_cells();
        let count = if count > empty.len() {
            empty.len().saturating_sub(1)
        } else {
            count
        };
        if count == 0 {
            return 0;
        }

        let chosen = index::sample(&mut self.rng, empty.len(), count);
        let size = board.size();
        let cells = board.cells_mut();
        for i in chosen.iter() {
            let at = empty[i];
            cells[at.row * size + at.col] = self.draw_exponent();
        }
        count
    }

    fn draw_exponent(&mut self) -> u8 {
        if self.rng.random_range(0..100) < LOW_SPAWN_PERCENT {
            LOW_SPAWN
        } else {
            HIGH_SPAWN
        }
    }
}
