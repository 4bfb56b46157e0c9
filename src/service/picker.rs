//! Index pickers for car selection.
//!
//! Car selection needs a uniformly random index into a category's car list.
//! The source of that index is pluggable so callers can trade true
//! randomness for reproducibility.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of indices into a non-empty list.
pub trait IndexPicker: Send + Sync {
    /// Returns an index in `[0, len)`.
    ///
    /// Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Picks indices from the thread-local random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIndex;

impl IndexPicker for RandomIndex {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Picks indices from a seeded generator, yielding the same sequence for
/// the same seed.
#[derive(Debug)]
pub struct SeededIndex {
    rng: Mutex<StdRng>,
}

impl SeededIndex {
    /// Creates a picker seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndexPicker for SeededIndex {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Always picks the same index.
///
/// The index is returned as-is even when it is out of range, letting the
/// caller's bounds check surface the mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl IndexPicker for FixedIndex {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}
