use crate::convert::{to_coord53_squared, Encoding};
use crate::error::GeneratorError;

/// Common interface of all engines: slice seeding, batch fills and
/// the unit circle Monte Carlo test.
///
/// Each call to `generate` is one transition and yields one output per lane.
/// Outputs of multi-lane engines are interleaved by lane:
/// index `2k` holds lane 0's k-th output, index `2k + 1` lane 1's.
pub trait Generator: Sized {
    /// Seed words consumed by `from_seeds`.
    const SEED_COUNT: usize;
    /// Outputs produced per transition.
    const LANES: usize;
    /// Outputs of one transition, `LANES` long.
    type Block: AsRef<[u64]>;

    /// Seeds a generator from the first `SEED_COUNT` words of `seeds`.
    fn from_seeds(seeds: &[u64]) -> Result<Self, GeneratorError>;

    /// Performs one transition.
    fn generate(&mut self) -> Self::Block;

    /// Fills `out` with raw outputs.
    /// A trailing partial block (odd length on a dual-lane engine) is left untouched.
    fn fill_u64(&mut self, out: &mut [u64]) {
        for chunk in out.chunks_exact_mut(Self::LANES) {
            chunk.copy_from_slice(self.generate().as_ref());
        }
    }

    /// Fills `out` with encoded outputs.
    /// A trailing partial block (odd length on a dual-lane engine) is left untouched.
    fn fill(&mut self, out: &mut [f64], encoding: Encoding) {
        for chunk in out.chunks_exact_mut(Self::LANES) {
            let block = self.generate();
            for (slot, &x) in chunk.iter_mut().zip(block.as_ref()) {
                *slot = encoding.apply(x);
            }
        }
    }

    /// Next two outputs of the interleaved stream.
    fn next_pair(&mut self) -> [u64; 2] {
        let mut pair = [0u64; 2];
        self.fill_u64(&mut pair);
        pair
    }

    /// Next point as squared coordinates (x**2, y**2).
    #[inline]
    fn next_point_squared(&mut self) -> (f64, f64) {
        let [x, y] = self.next_pair();
        (to_coord53_squared(x), to_coord53_squared(y))
    }

    /// Draws `count` points in [-1, 1)**2 and returns how many lie
    /// inside the unit circle. 4 * hits / count estimates pi.
    fn unit_circle_hits(&mut self, count: u32) -> u32 {
        let mut hits = 0;
        for _ in 0 .. count {
            let (x2, y2) = self.next_point_squared();
            if x2 + y2 <= 1.0 {
                hits += 1;
            }
        }
        hits
    }
}

/// Engines with a jump function.
pub trait Jump {
    /// Advances the state as if the generator had been stepped
    /// a fixed, algorithm-specific, very large number of times.
    fn jump(&mut self);
}
