//! Injectable randomness for road generation
//!
//! The generator never reaches for global randomness. Callers pass a source
//! in, normally a seeded `ChaCha8Rng`, so identical seeds produce identical
//! road maps.

use rand::seq::SliceRandom;
use rand::Rng;

/// Random draws used by the growth loop.
pub trait RandomSource {
    /// Uniform integer in `[low, high)`. Callers guarantee `low < high`.
    fn next_int(&mut self, low: i32, high: i32) -> i32;

    /// Shuffle `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low..high)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}
