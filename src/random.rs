//! Random number generation for the rest of the crate.
//!
//! Everything that makes random choices takes `&mut impl Rng`, so callers
//! control determinism by what they pass in.  This module picks the crate's
//! default generator, a small fast PCG, and re-exports the rand traits the
//! other modules need.

pub use rand::{Rng, SeedableRng};

/// The crate's default pseudo-random generator.
pub type Prng = rand_pcg::Pcg64Mcg;

/// Makes the default generator from a seed.  The same seed always produces
/// the same stream, across platforms.
pub fn new_prng(seed: u64) -> Prng {
  Prng::seed_from_u64(seed)
}
