#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use crate::convert::Encoding;
use crate::error::{seed_words, GeneratorError};
use crate::generator::{Generator, Jump};
use crate::lanes::{U64x2, Word};

// Xoshiro256+ features
// -by David Blackman and Sebastiano Vigna
// -64-bit output, 256-bit state, period 2**256 - 1
// -jump() advances 2**128 steps, giving 2**128 non-overlapping streams of length 2**128
// -the lowest three output bits are weak, use the high bits (see convert)
// -the all-zero state is a fixed point and must not be seeded

/// Jump polynomial for 2**128 steps.
pub const XOSHIRO256_JUMP: [u64; 4] = [0x180ec6d33cfd0aba, 0xd5a61266f0c9392c, 0xa9582618e03fc9aa, 0x39abdc4529b1661c];

/// One Xoshiro256+ transition. Returns the output computed from the old state.
#[inline]
fn step<W: Word>(s: &mut [W; 4]) -> W {
    let [s0, s1, s2, s3] = *s;
    let result = s0.wrapping_add(s3);
    let t = s1 << 17u32;
    // The xor chain order matters: each line reads the words updated above it.
    let s2 = s2 ^ s0;
    let s3 = s3 ^ s1;
    let s1 = s1 ^ s2;
    let s0 = s0 ^ s3;
    let s2 = s2 ^ t;
    let s3 = s3.rotate_left(45);
    *s = [s0, s1, s2, s3];
    result
}

/// Xoshiro256+ non-cryptographic RNG. 64-bit output, 256-bit state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Xoshiro256Plus {
    s: [u64; 4],
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Xoshiro256Plus {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Xoshiro256Plus {{}}")
    }
}

impl Xoshiro256Plus {

    /// Creates a new Xoshiro256+ RNG with the given state words.
    /// The first output is s[0] + s[3]; no output is discarded.
    pub fn new(s: [u64; 4]) -> Self {
        Xoshiro256Plus { s }
    }

    /// Current state words.
    #[inline]
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Generates the next 64-bit random number.
    #[inline]
    pub fn next(&mut self) -> u64 {
        step(&mut self.s)
    }

    /// Advances the state by 2**128 steps.
    pub fn jump(&mut self) {
        crate::jump::jump(&mut self.s, &XOSHIRO256_JUMP, |s| { step(s); });
    }
}

impl Generator for Xoshiro256Plus {
    const SEED_COUNT: usize = 4;
    const LANES: usize = 1;
    type Block = [u64; 1];

    fn from_seeds(seeds: &[u64]) -> Result<Self, GeneratorError> {
        Ok(Xoshiro256Plus::new(seed_words::<4>("Xoshiro256+", seeds)?))
    }

    #[inline]
    fn generate(&mut self) -> [u64; 1] {
        [self.next()]
    }
}

impl Jump for Xoshiro256Plus {
    fn jump(&mut self) {
        Xoshiro256Plus::jump(self)
    }
}

/// Two independent Xoshiro256+ generators stepped in lockstep.
/// Each transition yields one output per lane.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Xoshiro256PlusX2 {
    s: [U64x2; 4],
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Xoshiro256PlusX2 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Xoshiro256PlusX2 {{}}")
    }
}

impl Xoshiro256PlusX2 {

    /// Creates a new dual-lane RNG. Lane 0 gets state `lane0`, lane 1 gets `lane1`.
    pub fn new(lane0: [u64; 4], lane1: [u64; 4]) -> Self {
        Xoshiro256PlusX2 { s: core::array::from_fn(|i| U64x2::new(lane0[i], lane1[i])) }
    }

    /// Packs two scalar generators into lanes 0 and 1.
    pub fn from_lanes(lane0: &Xoshiro256Plus, lane1: &Xoshiro256Plus) -> Self {
        Self::new(lane0.state(), lane1.state())
    }

    /// Returns a scalar generator positioned at lane `i` (0 or 1).
    ///
    /// # Panics
    /// Panics if `i > 1`.
    pub fn lane(&self, i: usize) -> Xoshiro256Plus {
        Xoshiro256Plus::new(self.s.map(|w| w.lane(i)))
    }

    /// Generates the next output of both lanes.
    #[inline]
    pub fn next(&mut self) -> U64x2 {
        step(&mut self.s)
    }

    /// Advances both lanes by 2**128 steps.
    pub fn jump(&mut self) {
        crate::jump::jump(&mut self.s, &XOSHIRO256_JUMP, |s| { step(s); });
    }
}

impl Generator for Xoshiro256PlusX2 {
    const SEED_COUNT: usize = 8;
    const LANES: usize = 2;
    type Block = [u64; 2];

    /// Seeds are lane 0's four words followed by lane 1's four words.
    fn from_seeds(seeds: &[u64]) -> Result<Self, GeneratorError> {
        let [a0, a1, a2, a3, b0, b1, b2, b3] = seed_words::<8>("Xoshiro256+ x2", seeds)?;
        Ok(Xoshiro256PlusX2::new([a0, a1, a2, a3], [b0, b1, b2, b3]))
    }

    #[inline]
    fn generate(&mut self) -> [u64; 2] {
        self.next().to_array()
    }

    /// Converts both lanes of each transition at once.
    fn fill(&mut self, out: &mut [f64], encoding: Encoding) {
        for chunk in out.chunks_exact_mut(2) {
            chunk.copy_from_slice(&encoding.apply_x2(self.next()));
        }
    }
}

impl Jump for Xoshiro256PlusX2 {
    fn jump(&mut self) {
        Xoshiro256PlusX2::jump(self)
    }
}

use super::{RngCore, Error, SeedableRng};

impl RngCore for Xoshiro256Plus {
    /// Upper 32 bits of the 64-bit output.
    fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next();
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

impl SeedableRng for Xoshiro256Plus {
    type Seed = [u8; 32];

    /// Creates a new Xoshiro256+ RNG from four little-endian state words.
    fn from_seed(seed: Self::Seed) -> Self {
        Xoshiro256Plus::new(crate::words_from_le_bytes(&seed))
    }
}
