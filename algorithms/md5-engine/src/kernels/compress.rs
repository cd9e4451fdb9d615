//! Compression Round
//!
//! Mixes one 64-byte block into the 128-bit chaining state over four rounds
//! of sixteen steps. All arithmetic wraps modulo 2^32.

use crate::engine::blocks::Block;
use crate::kernels::constants::{MESSAGE_SCHEDULE, ROTATIONS, SINE_TABLE, STEPS_PER_ROUND};

// =============================================================================
// MIXING FUNCTIONS
// =============================================================================

/// Signature shared by the four nonlinear round functions.
type MixFn = fn(u32, u32, u32) -> u32;

/// Round 1: bitwise select, `x ? y : z`.
#[inline]
const fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Round 2: bitwise select, `z ? x : y`.
#[inline]
const fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

/// Round 3: parity.
#[inline]
const fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// Round 4: `y ^ (x | !z)`.
#[inline]
const fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Mixing function per round.
const MIX: [MixFn; 4] = [f, g, h, i];

// =============================================================================
// COMPRESSION
// =============================================================================

/// Apply the 64 steps to `state` using `block`, then add the result to the
/// chaining values held before this block.
#[allow(clippy::many_single_char_names)]
pub fn compress(state: &mut [u32; 4], block: &Block) {
    let [mut a, mut b, mut c, mut d] = *state;

    let schedule = MESSAGE_SCHEDULE.iter().zip(&SINE_TABLE).enumerate();
    for (step, (&word_index, &constant)) in schedule {
        let round = step / STEPS_PER_ROUND;
        let mixed = MIX[round](b, c, d)
            .wrapping_add(a)
            .wrapping_add(block.word(word_index))
            .wrapping_add(constant);
        let rotated = mixed.rotate_left(ROTATIONS[round][step % 4]);

        // Roles shift one position: (A, B, C, D) <- (D, new, B, C)
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

// =============================================================================
// TESTS
// =============================================================================
