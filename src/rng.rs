use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer draws shared by every probabilistic component.
///
/// All frequency rolls, price bands and risk checks go through this one
/// wrapper so a run started with a fixed seed replays exactly.
pub struct GameRng(StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Uniform draw in `[0, upper)`. Returns 0 for a non-positive upper bound.
    pub fn num(&mut self, upper: i64) -> i64 {
        if upper <= 0 {
            return 0;
        }
        self.0.random_range(0..upper)
    }

    /// Uniform draw in `[min, max]` inclusive.
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        min + self.num(max - min + 1)
    }

    /// Percentage roll: true with `percent` in 100 chance.
    pub fn hit(&mut self, percent: i64) -> bool {
        self.num(100) < percent
    }
}

impl std::fmt::Debug for GameRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GameRng")
    }
}
