//! # Reply Picker
//!
//! File: cli/src/engine/picker.rs
//!
//! Chooses which of a topic's variants to use. The engine only sees the
//! `IndexPicker` trait, so a session can run on a seeded generator for
//! reproducible output and tests can plug in something fully predictable.
//!
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Source of indices into a list of reply variants.
pub trait IndexPicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform pseudo-random picker backed by `StdRng`. Not suitable for anything
/// security related; it only varies the bot's wording.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// A picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A picker that yields the same sequence for the same `seed`.
    pub fn seeded(seed: u64) -> Self {
        debug!("Seeding reply picker with {}", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded if `seed` is given, otherwise from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl IndexPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomPicker::seeded(7);
        let mut b = RandomPicker::seeded(7);
        let first: Vec<usize> = (0..20).map(|_| a.pick(3)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick(3)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn stays_in_range() {
        let mut picker = RandomPicker::from_entropy();
        for _ in 0..100 {
            assert!(picker.pick(3) < 3);
        }
        assert_eq!(picker.pick(1), 0);
    }
}
