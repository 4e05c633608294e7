//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Injected**: the engine only ever sees a [`RandomSource`], a source of
//!   floats in `[0, 1)`. It never reaches for ambient randomness.
//! - **Reproducible**: [`Mulberry32`] is bit-exact with the classic 32-bit
//!   mulberry32 generator, so a seed produces the same shuffle everywhere.
//! - **Serializable**: the generator is a single `u32`, carried inside the
//!   game state.
//!
//! ## Usage
//!
//! ```
//! use crowns_engine::core::{Mulberry32, RandomSource};
//!
//! let mut a = Mulberry32::new(42);
//! let mut b = Mulberry32::new(42);
//!
//! let x = a.next_unit();
//! assert!((0.0..1.0).contains(&x));
//! assert_eq!(x, b.next_unit());
//! ```
//!
//! Any `rand::RngCore` is also a `RandomSource`, which lets tests and
//! simulations drive the engine with other generators.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const TWO_POW_32: f64 = 4_294_967_296.0;

/// A source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource {
    /// Return the next float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Return a uniformly chosen index in `0..bound` as `floor(next_unit() * bound)`.
    ///
    /// `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize {
        let j = (self.next_unit() * bound as f64).floor() as usize;
        // A source returning exactly 1.0 still maps into range.
        j.min(bound.saturating_sub(1))
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

/// Adapter for a plain closure returning floats in `[0, 1)`.
///
/// ```
/// use crowns_engine::core::{FnSource, RandomSource};
///
/// let mut zero = FnSource(|| 0.0);
/// assert_eq!(zero.next_index(10), 0);
/// ```
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> RandomSource for FnSource<F> {
    fn next_unit(&mut self) -> f64 {
        (self.0)()
    }
}

/// The mulberry32 generator.
///
/// Each step adds `0x6D2B79F5` to the state and mixes it with 32-bit
/// wrapping arithmetic. The raw 32-bit output is exposed through
/// `RngCore::next_u32`; `next_unit` divides it by `2^32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a 32-bit seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state, for checkpointing.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the raw 32-bit output.
    pub fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let t = self.state;
        let mut x = (t ^ (t >> 15)).wrapping_mul(t | 1);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(x | 61));
        x ^ (x >> 14)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_word());
        let hi = u64::from(self.next_word());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
