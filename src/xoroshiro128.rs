#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use crate::convert::Encoding;
use crate::error::{seed_words, GeneratorError};
use crate::generator::{Generator, Jump};
use crate::lanes::{U64x2, Word};

// Xoroshiro128+ features
// -by David Blackman and Sebastiano Vigna
// -64-bit output, 128-bit state, period 2**128 - 1
// -jump() advances 2**64 steps, giving 2**64 non-overlapping streams of length 2**64
// -the lowest output bits are weak, use the high bits (see convert)
// -the all-zero state is a fixed point and must not be seeded

/// Jump polynomial for 2**64 steps.
pub const XOROSHIRO128_JUMP: [u64; 2] = [0xdf900294d8f554a5, 0x170865df4b3201fc];

/// One Xoroshiro128+ transition. Returns the output computed from the old state.
#[inline]
fn step<W: Word>(s: &mut [W; 2]) -> W {
    let s0 = s[0];
    let mut s1 = s[1];
    let result = s0.wrapping_add(s1);
    s1 ^= s0;
    s[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16u32);
    s[1] = s1.rotate_left(37);
    result
}

/// Xoroshiro128+ non-cryptographic RNG. 64-bit output, 128-bit state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Xoroshiro128Plus {
    s: [u64; 2],
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Xoroshiro128Plus {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Xoroshiro128Plus {{}}")
    }
}

impl Xoroshiro128Plus {

    /// Creates a new Xoroshiro128+ RNG with state words (s0, s1).
    /// The first output is s0 + s1; no output is discarded.
    pub fn new(s0: u64, s1: u64) -> Self {
        Xoroshiro128Plus { s: [s0, s1] }
    }

    /// Current state words.
    #[inline]
    pub fn state(&self) -> [u64; 2] {
        self.s
    }

    /// Generates the next 64-bit random number.
    #[inline]
    pub fn next(&mut self) -> u64 {
        step(&mut self.s)
    }

    /// Advances the state by 2**64 steps.
    pub fn jump(&mut self) {
        crate::jump::jump(&mut self.s, &XOROSHIRO128_JUMP, |s| { step(s); });
    }
}

impl Generator for Xoroshiro128Plus {
    const SEED_COUNT: usize = 2;
    const LANES: usize = 1;
    type Block = [u64; 1];

    fn from_seeds(seeds: &[u64]) -> Result<Self, GeneratorError> {
        let [s0, s1] = seed_words::<2>("Xoroshiro128+", seeds)?;
        Ok(Xoroshiro128Plus::new(s0, s1))
    }

    #[inline]
    fn generate(&mut self) -> [u64; 1] {
        [self.next()]
    }
}

impl Jump for Xoroshiro128Plus {
    fn jump(&mut self) {
        Xoroshiro128Plus::jump(self)
    }
}

/// Two independent Xoroshiro128+ generators stepped in lockstep.
/// Each transition yields one output per lane.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Xoroshiro128PlusX2 {
    s: [U64x2; 2],
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Xoroshiro128PlusX2 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Xoroshiro128PlusX2 {{}}")
    }
}

impl Xoroshiro128PlusX2 {

    /// Creates a new dual-lane RNG. Lane 0 gets state `lane0`, lane 1 gets `lane1`.
    pub fn new(lane0: [u64; 2], lane1: [u64; 2]) -> Self {
        Xoroshiro128PlusX2 { s: [U64x2::new(lane0[0], lane1[0]), U64x2::new(lane0[1], lane1[1])] }
    }

    /// Packs two scalar generators into lanes 0 and 1.
    pub fn from_lanes(lane0: &Xoroshiro128Plus, lane1: &Xoroshiro128Plus) -> Self {
        Self::new(lane0.state(), lane1.state())
    }

    /// Returns a scalar generator positioned at lane `i` (0 or 1).
    ///
    /// # Panics
    /// Panics if `i > 1`.
    pub fn lane(&self, i: usize) -> Xoroshiro128Plus {
        Xoroshiro128Plus::new(self.s[0].lane(i), self.s[1].lane(i))
    }

    /// Generates the next output of both lanes.
    #[inline]
    pub fn next(&mut self) -> U64x2 {
        step(&mut self.s)
    }

    /// Advances both lanes by 2**64 steps.
    pub fn jump(&mut self) {
        crate::jump::jump(&mut self.s, &XOROSHIRO128_JUMP, |s| { step(s); });
    }
}

impl Generator for Xoroshiro128PlusX2 {
    const SEED_COUNT: usize = 4;
    const LANES: usize = 2;
    type Block = [u64; 2];

    /// Seeds are lane 0's two words followed by lane 1's two words.
    fn from_seeds(seeds: &[u64]) -> Result<Self, GeneratorError> {
        let [a0, a1, b0, b1] = seed_words::<4>("Xoroshiro128+ x2", seeds)?;
        Ok(Xoroshiro128PlusX2::new([a0, a1], [b0, b1]))
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

impl Jump for Xoroshiro128PlusX2 {
    fn jump(&mut self) {
        Xoroshiro128PlusX2::jump(self)
    }
}

use super::{RngCore, Error, SeedableRng};

impl RngCore for Xoroshiro128Plus {
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

impl SeedableRng for Xoroshiro128Plus {
    type Seed = [u8; 16];

    /// Creates a new Xoroshiro128+ RNG from two little-endian state words.
    fn from_seed(seed: Self::Seed) -> Self {
        let [s0, s1] = crate::words_from_le_bytes(&seed);
        Xoroshiro128Plus::new(s0, s1)
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::convert::to_float53;
    use crate::tests::{lcg, DOUBLE_0, DOUBLE_1, QUAD_2, QUAD_3};
    use std::collections::HashSet;
    use std::vec::Vec;

    #[test] pub fn matches_reference_outputs() {
        let mut rng = Xoroshiro128Plus::new(1, 2);
        let outputs: Vec<u64> = (0 .. 4).map(|_| rng.next()).collect();
        assert_eq!(outputs, [3, 412333834243, 2360170716294286339, 9295852285959843169]);
    }

    #[test] pub fn jump_matches_reference() {
        let mut rng = Xoroshiro128Plus::new(DOUBLE_0, DOUBLE_1);
        rng.jump();
        let x = rng.next();
        assert_eq!(x, 17359279474558191039);
        assert_eq!(to_float53(x), (x >> 11) as f64 * (f64::EPSILON / 2.0));

        let mut rng = Xoroshiro128Plus::new(QUAD_2, QUAD_3);
        rng.jump();
        assert_eq!(rng.next(), 10378667817521252702);
    }

    #[test] pub fn same_seed_same_sequence() {
        let mut rnd = lcg(1);
        for _ in 0 .. 1<<6 {
            let (s0, s1) = (rnd(), rnd());
            let mut a = Xoroshiro128Plus::new(s0, s1);
            let mut b = Xoroshiro128Plus::new(s0, s1);
            let jumps = rnd() & 3;
            for _ in 0 .. jumps { a.jump(); b.jump(); }
            for _ in 0 .. 256 {
                assert_eq!(a.next(), b.next());
            }
        }
    }

    #[test] pub fn jumped_streams_do_not_overlap() {
        let mut seen = HashSet::new();
        for jumps in 0 .. 4 {
            let mut rng = Xoroshiro128Plus::new(DOUBLE_0, DOUBLE_1);
            for _ in 0 .. jumps { rng.jump(); }
            for _ in 0 .. 4000 {
                assert!(seen.insert(rng.next()));
            }
        }
    }

    #[test] pub fn outputs_are_unique() {
        let mut rng = Xoroshiro128Plus::new(DOUBLE_0, DOUBLE_1);
        let outputs: HashSet<u64> = (0 .. 10_000).map(|_| rng.next()).collect();
        assert_eq!(outputs.len(), 10_000);
    }

    #[test] pub fn batch_fill_matches_single_calls() {
        let mut a = Xoroshiro128Plus::new(DOUBLE_0, DOUBLE_1);
        let mut b = a.clone();
        let mut raw = [0u64; 31];
        a.fill_u64(&mut raw);
        for &x in raw.iter() {
            assert_eq!(x, b.next());
        }
        for encoding in Encoding::ALL {
            let mut values = [0f64; 31];
            a.fill(&mut values, encoding);
            for &v in values.iter() {
                assert_eq!(v.to_bits(), encoding.apply(b.next()).to_bits());
            }
        }
    }

    #[test] pub fn lanes_match_scalar_engines() {
        let mut rnd = lcg(2);
        for _ in 0 .. 1<<5 {
            let lane0 = [rnd(), rnd()];
            let lane1 = [rnd(), rnd()];
            let mut x2 = Xoroshiro128PlusX2::new(lane0, lane1);
            let mut a = Xoroshiro128Plus::new(lane0[0], lane0[1]);
            let mut b = Xoroshiro128Plus::new(lane1[0], lane1[1]);
            for round in 0 .. 3 {
                for _ in 0 .. 100 {
                    assert_eq!(x2.next().to_array(), [a.next(), b.next()]);
                }
                if round < 2 {
                    x2.jump();
                    a.jump();
                    b.jump();
                }
                assert_eq!(x2.lane(0), a);
                assert_eq!(x2.lane(1), b);
            }
        }
    }

    #[test] pub fn lane_jump_matches_reference() {
        let mut x2 = Xoroshiro128PlusX2::from_seeds(&[DOUBLE_0, DOUBLE_1, QUAD_2, QUAD_3]).unwrap();
        x2.jump();
        assert_eq!(x2.next().to_array(), [17359279474558191039, 10378667817521252702]);
    }

    #[test] pub fn identical_lanes_stay_identical() {
        let mut x2 = Xoroshiro128PlusX2::from_seeds(&[DOUBLE_0, DOUBLE_1, DOUBLE_0, DOUBLE_1]).unwrap();
        for i in 0 .. 2000 {
            if i % 500 == 0 { x2.jump(); }
            let v = x2.next();
            assert_eq!(v.lane(0), v.lane(1));
        }
    }

    #[test] pub fn interleaved_fill_matches_lanes() {
        let mut x2 = Xoroshiro128PlusX2::new([DOUBLE_0, DOUBLE_1], [QUAD_2, QUAD_3]);
        let mut a = x2.lane(0);
        let mut b = x2.lane(1);
        let mut raw = [0u64; 64];
        x2.fill_u64(&mut raw);
        for pair in raw.chunks(2) {
            assert_eq!(pair, [a.next(), b.next()]);
        }
        let mut values = [0f64; 40];
        x2.fill(&mut values, Encoding::Coord53);
        for pair in values.chunks(2) {
            assert_eq!(pair, [Encoding::Coord53.apply(a.next()), Encoding::Coord53.apply(b.next())]);
        }
    }

    #[test] pub fn odd_fill_leaves_last_slot() {
        let mut x2 = Xoroshiro128PlusX2::new([1, 2], [3, 4]);
        let mut reference = x2.clone();
        let mut raw = [u64::MAX; 5];
        x2.fill_u64(&mut raw);
        assert_eq!(raw[4], u64::MAX);
        let mut values = [-7.0f64; 3];
        x2.fill(&mut values, Encoding::Float53);
        assert_eq!(values[2], -7.0);
        // Exactly two then one transitions were consumed.
        for _ in 0 .. 3 { reference.next(); }
        assert_eq!(x2, reference);
    }

    #[test] pub fn unit_circle_hits() {
        let mut rng = Xoroshiro128Plus::new(DOUBLE_0, DOUBLE_1);
        assert_eq!(rng.unit_circle_hits(1000), 797);

        let mut rng = Xoroshiro128Plus::new(DOUBLE_0, DOUBLE_1);
        let mut manual = Xoroshiro128Plus::new(DOUBLE_0, DOUBLE_1);
        let hits = rng.unit_circle_hits(5000);
        let mut expected = 0;
        for _ in 0 .. 5000 {
            let x = crate::convert::to_coord53(manual.next());
            let y = crate::convert::to_coord53(manual.next());
            if x * x + y * y <= 1.0 { expected += 1; }
        }
        assert_eq!(hits, expected);

        let mut rng = Xoroshiro128Plus::new(DOUBLE_0, DOUBLE_1);
        let pi = 4.0 * rng.unit_circle_hits(1_000_000) as f64 / 1_000_000.0;
        assert!((pi - core::f64::consts::PI).abs() < 0.01);
    }

    #[test] pub fn lane_unit_circle_uses_lane_pairs() {
        let mut x2 = Xoroshiro128PlusX2::new([DOUBLE_0, DOUBLE_1], [QUAD_2, QUAD_3]);
        let mut a = x2.lane(0);
        let mut b = x2.lane(1);
        let hits = x2.unit_circle_hits(2000);
        let expected = (0 .. 2000).filter(|_| {
            let (xx, yy) = (crate::convert::to_coord53_squared(a.next()), crate::convert::to_coord53_squared(b.next()));
            xx + yy <= 1.0
        }).count();
        assert_eq!(hits as usize, expected);
    }

    #[test] pub fn seeding() {
        assert_eq!(Xoroshiro128Plus::from_seeds(&[1, 2]).unwrap(), Xoroshiro128Plus::new(1, 2));
        assert_eq!(
            Xoroshiro128Plus::from_seeds(&[1]).unwrap_err(),
            GeneratorError::InsufficientSeeds { algorithm: "Xoroshiro128+", required: 2, supplied: 1 }
        );
        assert!(Xoroshiro128PlusX2::from_seeds(&[1, 2, 3]).is_err());
        assert_eq!(
            Xoroshiro128PlusX2::from_lanes(&Xoroshiro128Plus::new(1, 2), &Xoroshiro128Plus::new(3, 4)),
            Xoroshiro128PlusX2::from_seeds(&[1, 2, 3, 4]).unwrap()
        );

        let mut seed = [0u8; 16];
        seed[.. 8].copy_from_slice(&DOUBLE_0.to_le_bytes());
        seed[8 ..].copy_from_slice(&DOUBLE_1.to_le_bytes());
        assert_eq!(Xoroshiro128Plus::from_seed(seed), Xoroshiro128Plus::new(DOUBLE_0, DOUBLE_1));

        let mut rng = Xoroshiro128Plus::new(5, 6);
        let x = rng.clone().next();
        assert_eq!(RngCore::next_u32(&mut rng), (x >> 32) as u32);
    }

    #[test] pub fn fill_converts_lanes_together() {
        let mut x2 = Xoroshiro128PlusX2::new([DOUBLE_0, DOUBLE_1], [QUAD_2, QUAD_3]);
        let mut reference = x2.clone();
        for encoding in Encoding::ALL {
            let mut values = [-3.0f64; 9];
            x2.fill(&mut values, encoding);
            for pair in values[.. 8].chunks(2) {
                assert_eq!(pair, encoding.apply_x2(reference.next()));
            }
            assert_eq!(values[8], -3.0);
        }
        let mut values = [0f64; 2];
        x2.fill(&mut values, Encoding::Coord53Squared);
        assert_eq!(values, crate::convert::to_coord53_squared_x2(reference.next()));
    }

    #[test] #[should_panic] pub fn lane_index_out_of_range() {
        Xoroshiro128PlusX2::new([1, 2], [3, 4]).lane(2);
    }
}
