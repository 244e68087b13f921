// the target ("mouse") is placed anywhere inside the border ring,
// the snake body is not taken into account
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::snake::Position;

#[derive(Debug, Clone)]
pub struct TargetSpawner {
    rng: StdRng,
}

impl TargetSpawner {
    pub fn new() -> Self {
        TargetSpawner {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic spawner, for reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        TargetSpawner {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a cell in `[1, width-1) x [1, height-1)`
    pub fn spawn(&mut self, board: &Board) -> Position {
        let x = self.rng.random_range(1..board.width() - 1);
        let y = self.rng.random_range(1..board.height() - 1);
        Position::new(x, y)
    }
}

impl Default for TargetSpawner {
    fn default() -> Self {
        Self::new()
    }
}
