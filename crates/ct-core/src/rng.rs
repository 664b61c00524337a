//! The simulation-wide random number generator.
//!
//! Every random decision in a run (actor spawning, names, tickets, bus
//! advancement, expulsion draws) is taken from one `SimRng`, so a fixed seed
//! reproduces a run exactly.  The engine is single-threaded; the generator is
//! never shared.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable wrapper around `SmallRng`.
///
/// `Clone` lets tests fork the generator to look at the next draw without
/// disturbing the stream the simulation consumes.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    /// For `f64` the value lies in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// `amount` distinct indices drawn uniformly from `0..length`, in random
    /// order.
    ///
    /// # Panics
    /// Panics if `amount > length`; callers validate this up front.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
