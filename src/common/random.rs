use rand::Rng;

/// Source of uniform picks for symbol and tip selection.
pub trait RandomSource: Send + Sync {
    /// Index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}
