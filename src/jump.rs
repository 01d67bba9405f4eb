use crate::lanes::Word;

// This module contains the jump-ahead routine shared by the
// xor-shift-rotate generators (scalar and dual-lane).

/// Advances `state` by the distance encoded in `polynomial`.
///
/// The transition of an xor-shift-rotate generator is linear over GF(2),
/// so advancing by 2**k steps equals evaluating the jump polynomial
/// p(T) = sum c_i T**i at the transition T. The polynomial coefficients
/// are the bits of `polynomial`, lowest bit of word 0 first. Each set bit
/// accumulates the current state, and the state is stepped once per bit
/// regardless of its value.
///
/// `step` must perform exactly one transition of the generator.
/// Lane words are handled lane-wise, so each lane jumps independently.
pub fn jump<W: Word, const N: usize>(state: &mut [W; N], polynomial: &[u64], mut step: impl FnMut(&mut [W; N])) {
    let mut accumulator = [W::default(); N];
    for &coefficients in polynomial {
        for bit in 0 .. 64 {
            if coefficients & (1u64 << bit) != 0 {
                for (a, &s) in accumulator.iter_mut().zip(state.iter()) {
                    *a ^= s;
                }
            }
            step(state);
        }
    }
    *state = accumulator;
}
