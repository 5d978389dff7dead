//! Randomness seam for the imposter draw and word suggestions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Source of fair die rolls.
///
/// The game only ever needs "pick one of `n` uniformly", so that is the
/// whole interface. No cryptographic strength is implied.
pub trait RandomSource {
    /// Rolls a die with `sides` faces and returns a value in `1..=sides`.
    ///
    /// Callers never pass zero.
    fn roll(&mut self, sides: usize) -> usize;
}

/// Uniform rolls backed by a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct Dice<R = SmallRng> {
    rng: R,
}

impl Dice<SmallRng> {
    /// Seeds from the operating system.
    #[instrument]
    pub fn from_os_rng() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Seeds deterministically, for repeatable games.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "Seeding dice");
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Dice<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for Dice<SmallRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> RandomSource for Dice<R> {
    fn roll(&mut self, sides: usize) -> usize {
        self.rng.random_range(1..=sides)
    }
}

/// A loaded die: always rolls the same face, clamped to the die size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRoll(pub usize);

impl RandomSource for FixedRoll {
    fn roll(&mut self, sides: usize) -> usize {
        self.0.clamp(1, sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_stay_on_the_die() {
        let mut dice = Dice::seeded(7);
        for sides in 1..=67 {
            for _ in 0..50 {
                let face = dice.roll(sides);
                assert!((1..=sides).contains(&face));
            }
        }
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = Dice::seeded(42);
        let mut b = Dice::seeded(42);
        let left: Vec<_> = (0..20).map(|_| a.roll(10)).collect();
        let right: Vec<_> = (0..20).map(|_| b.roll(10)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_every_face_comes_up() {
        let mut dice = Dice::seeded(3);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[dice.roll(5) - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_fixed_roll_clamps() {
        assert_eq!(FixedRoll(3).roll(5), 3);
        assert_eq!(FixedRoll(9).roll(5), 5);
        assert_eq!(FixedRoll(0).roll(5), 1);
    }
}
