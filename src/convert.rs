use crate::lanes::U64x2;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

// Conversions from raw 64-bit generator output to floating point.
// The low bits of xor-shift family outputs are the weakest, so every
// conversion keeps the high bits. All shifts are logical and all scalings
// are by powers of two, which keeps results exact and identical between
// the scalar and lane-wise forms.

/// 2**53 as a double. Dividing by it is exact.
const TWO_POW_53: f64 = 9007199254740992.0;

/// High 53 bits as an integer-valued double in [0, 2**53 - 1].
#[inline]
pub fn to_uint53_float(x: u64) -> f64 {
    (x >> 11) as f64
}

/// High 32 bits as an integer-valued double in [0, 2**32 - 1].
#[inline]
pub fn to_uint32_float(x: u64) -> f64 {
    (x >> 32) as f64
}

/// Uniform double in [0, 1) with 53 bits of precision.
#[inline]
pub fn to_float53(x: u64) -> f64 {
    to_uint53_float(x) / TWO_POW_53
}

/// Uniform coordinate in [-1, 1).
#[inline]
pub fn to_coord53(x: u64) -> f64 {
    to_float53(x) * 2.0 - 1.0
}

/// Square of `to_coord53`, in [0, 1].
#[inline]
pub fn to_coord53_squared(x: u64) -> f64 {
    let c = to_coord53(x);
    c * c
}

/// Lane-wise `to_uint53_float`.
#[inline]
pub fn to_uint53_float_x2(v: U64x2) -> [f64; 2] {
    let v = v >> 11;
    [v.lane(0) as f64, v.lane(1) as f64]
}

/// Lane-wise `to_uint32_float`.
#[inline]
pub fn to_uint32_float_x2(v: U64x2) -> [f64; 2] {
    let v = v >> 32;
    [v.lane(0) as f64, v.lane(1) as f64]
}

/// Lane-wise `to_float53`.
#[inline]
pub fn to_float53_x2(v: U64x2) -> [f64; 2] {
    to_uint53_float_x2(v).map(|x| x / TWO_POW_53)
}

/// Lane-wise `to_coord53`.
#[inline]
pub fn to_coord53_x2(v: U64x2) -> [f64; 2] {
    to_float53_x2(v).map(|x| x * 2.0 - 1.0)
}

/// Lane-wise `to_coord53_squared`.
#[inline]
pub fn to_coord53_squared_x2(v: U64x2) -> [f64; 2] {
    to_coord53_x2(v).map(|c| c * c)
}

/// Output encoding for batch fills.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Encoding {
    /// `to_uint53_float`
    Uint53,
    /// `to_uint32_float`
    Uint32,
    /// `to_float53`
    Float53,
    /// `to_coord53`
    Coord53,
    /// `to_coord53_squared`
    Coord53Squared,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [Encoding::Uint53, Encoding::Uint32, Encoding::Float53, Encoding::Coord53, Encoding::Coord53Squared];

    /// Converts one raw output.
    #[inline]
    pub fn apply(self, x: u64) -> f64 {
        match self {
            Encoding::Uint53 => to_uint53_float(x),
            Encoding::Uint32 => to_uint32_float(x),
            Encoding::Float53 => to_float53(x),
            Encoding::Coord53 => to_coord53(x),
            Encoding::Coord53Squared => to_coord53_squared(x),
        }
    }

    /// Converts both lanes of a dual-lane output.
    #[inline]
    pub fn apply_x2(self, v: U64x2) -> [f64; 2] {
        match self {
            Encoding::Uint53 => to_uint53_float_x2(v),
            Encoding::Uint32 => to_uint32_float_x2(v),
            Encoding::Float53 => to_float53_x2(v),
            Encoding::Coord53 => to_coord53_x2(v),
            Encoding::Coord53Squared => to_coord53_squared_x2(v),
        }
    }
}
