use core::ops::{BitXor, BitXorAssign, Shl, Shr};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// A state word of an xor-shift-rotate generator.
/// Implemented by `u64` for scalar engines and by `U64x2` for dual-lane engines,
/// so both run the very same transition code.
pub trait Word: Copy + Default + Eq + BitXor<Output = Self> + BitXorAssign + Shl<u32, Output = Self> {
    /// Lane-wise addition modulo 2**64.
    fn wrapping_add(self, other: Self) -> Self;
    /// Lane-wise 64-bit rotate left.
    fn rotate_left(self, k: u32) -> Self;
}

impl Word for u64 {
    #[inline] fn wrapping_add(self, other: Self) -> Self {
        u64::wrapping_add(self, other)
    }

    #[inline] fn rotate_left(self, k: u32) -> Self {
        u64::rotate_left(self, k)
    }
}

/// Two independent 64-bit lanes updated in lockstep.
/// No operation ever moves bits between lanes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(C, align(16))]
pub struct U64x2(pub [u64; 2]);

impl U64x2 {
    pub const ZERO: U64x2 = U64x2([0, 0]);

    #[inline] pub const fn new(lane0: u64, lane1: u64) -> Self {
        U64x2([lane0, lane1])
    }

    /// Same value in both lanes.
    #[inline] pub const fn splat(x: u64) -> Self {
        U64x2([x, x])
    }

    /// Returns lane `i` (0 or 1).
    ///
    /// # Panics
    /// Panics if `i > 1`.
    #[inline] pub fn lane(self, i: usize) -> u64 {
        self.0[i]
    }

    #[inline] pub fn to_array(self) -> [u64; 2] {
        self.0
    }

    #[inline] fn map(self, f: impl Fn(u64) -> u64) -> Self {
        U64x2([f(self.0[0]), f(self.0[1])])
    }

    #[inline] fn zip(self, other: Self, f: impl Fn(u64, u64) -> u64) -> Self {
        U64x2([f(self.0[0], other.0[0]), f(self.0[1], other.0[1])])
    }
}

impl From<[u64; 2]> for U64x2 {
    #[inline] fn from(lanes: [u64; 2]) -> Self {
        U64x2(lanes)
    }
}

impl From<U64x2> for [u64; 2] {
    #[inline] fn from(v: U64x2) -> Self {
        v.0
    }
}

impl BitXor for U64x2 {
    type Output = U64x2;
    #[inline] fn bitxor(self, other: Self) -> Self {
        self.zip(other, |a, b| a ^ b)
    }
}

impl BitXorAssign for U64x2 {
    #[inline] fn bitxor_assign(&mut self, other: Self) {
        *self = *self ^ other;
    }
}

impl Shl<u32> for U64x2 {
    type Output = U64x2;
    #[inline] fn shl(self, k: u32) -> Self {
        self.map(|x| x << k)
    }
}

impl Shr<u32> for U64x2 {
    type Output = U64x2;
    /// Logical (zero-filling) right shift in each lane.
    #[inline] fn shr(self, k: u32) -> Self {
        self.map(|x| x >> k)
    }
}

impl Word for U64x2 {
    #[inline] fn wrapping_add(self, other: Self) -> Self {
        self.zip(other, u64::wrapping_add)
    }

    #[inline] fn rotate_left(self, k: u32) -> Self {
        self.map(|x| x.rotate_left(k))
    }
}
