use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use crate::error::{seed_words, GeneratorError};
use crate::generator::Generator;

// PCG32 features
// -PCG-XSH-RR by Melissa O'Neill
// -32-bit output, 64-bit state, 64-bit increment
// -2**63 streams selected by the odd increment
// -no jump function: parallel instances use distinct stream increments
// -seed() resets the increment, so a stream chosen before seeding is lost: seed first, then set_stream()

/// LCG multiplier of PCG32.
pub const PCG_MULTIPLIER: u64 = 6364136223846793005;

/// Increment used until a stream is selected.
pub const PCG_DEFAULT_INCREMENT: u64 = 1442695040888963407;

/// PCG-XSH-RR non-cryptographic RNG. 32-bit output, 64-bit state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Pcg32 {
    /// LCG state.
    state: u64,
    /// LCG increment, always odd.
    increment: u64,
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Pcg32 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Pcg32 {{}}")
    }
}

impl Pcg32 {

    /// Creates a new PCG32 RNG on the default stream.
    pub fn new(seed: u64) -> Self {
        let mut pcg = Pcg32 { state: 0, increment: PCG_DEFAULT_INCREMENT };
        pcg.seed(seed);
        pcg
    }

    /// Reseeds: state is set to the seed, the increment is reset to its default
    /// and one transition is discarded.
    ///
    /// This also discards any stream chosen earlier with `set_stream`,
    /// so select the stream after seeding. The two calls do not commute,
    /// and neither order reproduces the reference PCG initialization.
    pub fn seed(&mut self, seed: u64) {
        self.state = seed;
        self.increment = PCG_DEFAULT_INCREMENT;
        self.step();
    }

    /// Selects a stream. The increment becomes `(stream << 1) | 1`,
    /// so the top bit of `stream` is lost and every value is accepted.
    /// One transition is discarded.
    pub fn set_stream(&mut self, stream: u64) {
        self.increment = (stream << 1) | 1;
        self.step();
    }

    /// Current LCG increment.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Advances the LCG.
    #[wrappit] #[inline]
    fn step(&mut self) {
        self.state = self.state * PCG_MULTIPLIER + self.increment;
    }

    /// Generates the next 32-bit random number.
    /// Output is permuted from the state before the step.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generates the next 64-bit random number from two 32-bit outputs, high word first.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    /// Fills `out` with 32-bit outputs.
    pub fn fill_u32(&mut self, out: &mut [u32]) {
        for x in out.iter_mut() {
            *x = self.next_u32();
        }
    }
}

impl Generator for Pcg32 {
    const SEED_COUNT: usize = 1;
    const LANES: usize = 1;
    type Block = [u64; 1];

    fn from_seeds(seeds: &[u64]) -> Result<Self, GeneratorError> {
        let [seed] = seed_words::<1>("PCG32", seeds)?;
        Ok(Pcg32::new(seed))
    }

    #[inline]
    fn generate(&mut self) -> [u64; 1] {
        [self.next_u64()]
    }
}

use super::{RngCore, Error, SeedableRng};

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        Pcg32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        Pcg32::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = Pcg32::next_u64(self);
            let j = bytes.min(i + 8);
            // Always use Little-Endian.
            dest[i .. j].copy_from_slice(&x.to_le_bytes()[0 .. (j - i)]);
            i = j;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 8];

    /// Creates a new PCG32 RNG on the default stream from a little-endian seed.
    fn from_seed(seed: Self::Seed) -> Self {
        Pcg32::new(u64::from_le_bytes(seed))
    }
}
