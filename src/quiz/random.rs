use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks which of the remaining questions comes next.
pub trait IndexSource {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<F> IndexSource for F
where
    F: FnMut(usize) -> usize,
{
    fn next_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniform choice backed by a `rand` generator.
pub struct RngIndexSource<G: Rng> {
    rng: G,
}

impl RngIndexSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<G: Rng> RngIndexSource<G> {
    pub fn new(rng: G) -> Self {
        Self { rng }
    }
}

impl<G: Rng> IndexSource for RngIndexSource<G> {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
