//! Runtime selection among the generator families.
//!
//! `Algorithm` owns one engine of any family and dispatches by `match`,
//! so hosts that pick the algorithm at runtime (from a tag string or a
//! config file) need no trait objects.

use core::fmt;
use core::str::FromStr;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use crate::convert::Encoding;
use crate::error::GeneratorError;
use crate::generator::{Generator, Jump};
use crate::pcg::Pcg32;
use crate::xoroshiro128::{Xoroshiro128Plus, Xoroshiro128PlusX2};
use crate::xoshiro256::{Xoshiro256Plus, Xoshiro256PlusX2};

/// Generator family tag.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AlgorithmKind {
    Pcg32,
    Xoroshiro128Plus,
    Xoroshiro128PlusX2,
    Xoshiro256Plus,
    Xoshiro256PlusX2,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Pcg32,
        AlgorithmKind::Xoroshiro128Plus,
        AlgorithmKind::Xoroshiro128PlusX2,
        AlgorithmKind::Xoshiro256Plus,
        AlgorithmKind::Xoshiro256PlusX2,
    ];

    /// Seed words required by `Algorithm::from_seeds`.
    pub fn seed_count(self) -> usize {
        match self {
            AlgorithmKind::Pcg32 => Pcg32::SEED_COUNT,
            AlgorithmKind::Xoroshiro128Plus => Xoroshiro128Plus::SEED_COUNT,
            AlgorithmKind::Xoroshiro128PlusX2 => Xoroshiro128PlusX2::SEED_COUNT,
            AlgorithmKind::Xoshiro256Plus => Xoshiro256Plus::SEED_COUNT,
            AlgorithmKind::Xoshiro256PlusX2 => Xoshiro256PlusX2::SEED_COUNT,
        }
    }

    /// Outputs produced per transition.
    pub fn lanes(self) -> usize {
        match self {
            AlgorithmKind::Pcg32 => Pcg32::LANES,
            AlgorithmKind::Xoroshiro128Plus => Xoroshiro128Plus::LANES,
            AlgorithmKind::Xoroshiro128PlusX2 => Xoroshiro128PlusX2::LANES,
            AlgorithmKind::Xoshiro256Plus => Xoshiro256Plus::LANES,
            AlgorithmKind::Xoshiro256PlusX2 => Xoshiro256PlusX2::LANES,
        }
    }

    /// PCG selects streams by increment and has no jump function.
    pub fn supports_jump(self) -> bool {
        self != AlgorithmKind::Pcg32
    }

    /// Tag accepted by `FromStr`.
    pub fn tag(self) -> &'static str {
        match self {
            AlgorithmKind::Pcg32 => "pcg",
            AlgorithmKind::Xoroshiro128Plus => "xoroshiro128plus",
            AlgorithmKind::Xoroshiro128PlusX2 => "xoroshiro128plus_simd",
            AlgorithmKind::Xoshiro256Plus => "xoshiro256plus",
            AlgorithmKind::Xoshiro256PlusX2 => "xoshiro256plus_simd",
        }
    }

    fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Pcg32 => "PCG32",
            AlgorithmKind::Xoroshiro128Plus => "Xoroshiro128+",
            AlgorithmKind::Xoroshiro128PlusX2 => "Xoroshiro128+ x2",
            AlgorithmKind::Xoshiro256Plus => "Xoshiro256+",
            AlgorithmKind::Xoshiro256PlusX2 => "Xoshiro256+ x2",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmKind::ALL.iter().copied().find(|kind| kind.tag() == s).ok_or(GeneratorError::UnknownAlgorithm)
    }
}

/// A generator of any family.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Algorithm {
    Pcg32(Pcg32),
    Xoroshiro128Plus(Xoroshiro128Plus),
    Xoroshiro128PlusX2(Xoroshiro128PlusX2),
    Xoshiro256Plus(Xoshiro256Plus),
    Xoshiro256PlusX2(Xoshiro256PlusX2),
}

fn jump_times<J: Jump>(rng: &mut J, times: u64) {
    for _ in 0 .. times {
        rng.jump();
    }
}

macro_rules! dispatch {
    ($self:expr, $rng:ident => $body:expr) => {
        match $self {
            Algorithm::Pcg32($rng) => $body,
            Algorithm::Xoroshiro128Plus($rng) => $body,
            Algorithm::Xoroshiro128PlusX2($rng) => $body,
            Algorithm::Xoshiro256Plus($rng) => $body,
            Algorithm::Xoshiro256PlusX2($rng) => $body,
        }
    };
}

impl Algorithm {

    /// Seeds a generator of the given family from `kind.seed_count()` words.
    /// Scalar families take their state words in order; dual-lane families
    /// take lane 0's words followed by lane 1's.
    pub fn from_seeds(kind: AlgorithmKind, seeds: &[u64]) -> Result<Self, GeneratorError> {
        let algorithm = match kind {
            AlgorithmKind::Pcg32 => Algorithm::Pcg32(Pcg32::from_seeds(seeds)?),
            AlgorithmKind::Xoroshiro128Plus => Algorithm::Xoroshiro128Plus(Xoroshiro128Plus::from_seeds(seeds)?),
            AlgorithmKind::Xoroshiro128PlusX2 => Algorithm::Xoroshiro128PlusX2(Xoroshiro128PlusX2::from_seeds(seeds)?),
            AlgorithmKind::Xoshiro256Plus => Algorithm::Xoshiro256Plus(Xoshiro256Plus::from_seeds(seeds)?),
            AlgorithmKind::Xoshiro256PlusX2 => Algorithm::Xoshiro256PlusX2(Xoshiro256PlusX2::from_seeds(seeds)?),
        };
        tracing::debug!(algorithm = %kind, seeds = seeds.len(), "seeded generator");
        Ok(algorithm)
    }

    /// Seeds a generator and moves it to stream `index`.
    ///
    /// Workers that share `seeds` and use distinct indices get
    /// non-overlapping output. Jumping families jump `index` times,
    /// which costs `index` jumps. PCG selects stream increment `index`
    /// after seeding.
    pub fn stream(kind: AlgorithmKind, seeds: &[u64], index: u64) -> Result<Self, GeneratorError> {
        let mut algorithm = Self::from_seeds(kind, seeds)?;
        match &mut algorithm {
            Algorithm::Pcg32(rng) => rng.set_stream(index),
            Algorithm::Xoroshiro128Plus(rng) => jump_times(rng, index),
            Algorithm::Xoroshiro128PlusX2(rng) => jump_times(rng, index),
            Algorithm::Xoshiro256Plus(rng) => jump_times(rng, index),
            Algorithm::Xoshiro256PlusX2(rng) => jump_times(rng, index),
        }
        tracing::debug!(algorithm = %kind, index, "selected stream");
        Ok(algorithm)
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Pcg32(_) => AlgorithmKind::Pcg32,
            Algorithm::Xoroshiro128Plus(_) => AlgorithmKind::Xoroshiro128Plus,
            Algorithm::Xoroshiro128PlusX2(_) => AlgorithmKind::Xoroshiro128PlusX2,
            Algorithm::Xoshiro256Plus(_) => AlgorithmKind::Xoshiro256Plus,
            Algorithm::Xoshiro256PlusX2(_) => AlgorithmKind::Xoshiro256PlusX2,
        }
    }

    /// Jumps ahead. Fails for PCG, which has no jump function.
    pub fn jump(&mut self) -> Result<(), GeneratorError> {
        tracing::trace!(algorithm = %self.kind(), "jump");
        match self {
            Algorithm::Pcg32(_) => return Err(GeneratorError::JumpUnsupported { algorithm: AlgorithmKind::Pcg32.name() }),
            Algorithm::Xoroshiro128Plus(rng) => rng.jump(),
            Algorithm::Xoroshiro128PlusX2(rng) => rng.jump(),
            Algorithm::Xoshiro256Plus(rng) => rng.jump(),
            Algorithm::Xoshiro256PlusX2(rng) => rng.jump(),
        }
        Ok(())
    }

    /// See `Generator::fill_u64`.
    pub fn fill_u64(&mut self, out: &mut [u64]) {
        dispatch!(self, rng => rng.fill_u64(out))
    }

    /// See `Generator::fill`.
    pub fn fill(&mut self, out: &mut [f64], encoding: Encoding) {
        dispatch!(self, rng => rng.fill(out, encoding))
    }

    /// See `Generator::next_pair`.
    pub fn next_pair(&mut self) -> [u64; 2] {
        dispatch!(self, rng => rng.next_pair())
    }

    /// See `Generator::unit_circle_hits`.
    pub fn unit_circle_hits(&mut self, count: u32) -> u32 {
        dispatch!(self, rng => rng.unit_circle_hits(count))
    }
}
