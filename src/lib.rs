//! Seedable, reproducible PRNGs with jump-ahead parallel streams:
//! PCG32 (PCG-XSH-RR), Xoroshiro128+, Xoshiro256+ and dual-lane
//! variants of the latter two, plus exact conversions of raw output
//! to floating point.
#![no_std]

#[cfg(test)] extern crate std;

pub mod algorithm;
pub mod convert;
pub mod error;
pub mod generator;
pub mod jump;
pub mod lanes;
pub mod pcg;
pub mod xoroshiro128;
pub mod xoshiro256;

pub use algorithm::*;
pub use convert::*;
pub use error::GeneratorError;
pub use generator::*;
pub use lanes::U64x2;
pub use pcg::*;
pub use xoroshiro128::*;
pub use xoshiro256::*;
pub use rand_core::*;

/// Reads `N` little-endian 64-bit words from the front of `bytes`.
/// `bytes` must hold at least `8 * N` bytes.
pub(crate) fn words_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    core::array::from_fn(|i| {
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[i * 8 .. i * 8 + 8]);
        u64::from_le_bytes(word)
    })
}
