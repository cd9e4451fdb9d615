//! MD5 Kernel Constants
//!
//! Every table here is fixed by RFC 1321. The additive constants follow a
//! single rule:
//!
//! ```text
//! SINE_TABLE[i] = floor(|sin(i + 1)| * 2^32)
//! ```
//!
//! where `i + 1` is the step number in radians.

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Compression block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit little-endian words in one block.
pub const WORDS_PER_BLOCK: usize = BLOCK_SIZE / 4;

/// Digest output size in bytes (128 bits).
pub const DIGEST_SIZE: usize = 16;

/// Size of the little-endian bit-length trailer appended by the padder.
pub const LENGTH_TRAILER_SIZE: usize = 8;

/// First padding byte: a single `1` bit followed by seven `0` bits.
pub const PADDING_MARKER: u8 = 0x80;

/// Largest input (in bytes) whose bit length fits in the 64-bit trailer.
pub const MAX_INPUT_LEN: u64 = (1 << 61) - 1;

/// Rounds per block.
pub const ROUNDS: usize = 4;

/// Steps per round.
pub const STEPS_PER_ROUND: usize = 16;

// =============================================================================
// INITIAL STATE
// =============================================================================

/// Initial chaining values A, B, C, D.
pub const INITIAL_STATE: [u32; 4] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

// =============================================================================
// STEP TABLES
// =============================================================================

/// Left-rotate amounts, indexed by `[round][step % 4]`.
pub const ROTATIONS: [[u32; 4]; ROUNDS] = [
    [7, 12, 17, 22], // Round 1
    [5, 9, 14, 20],  // Round 2
    [4, 11, 16, 23], // Round 3
    [6, 10, 15, 21], // Round 4
];

#[rustfmt::skip]
/// Message word consumed at each step.
///
/// Round 1 reads words in order, rounds 2-4 use `(1 + 5i)`, `(5 + 3i)` and
/// `7i` modulo 16.
pub const MESSAGE_SCHEDULE: [usize; ROUNDS * STEPS_PER_ROUND] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, // Round 1
    1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, // Round 2
    5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2, // Round 3
    0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9, // Round 4
];

#[rustfmt::skip]
/// Per-step additive constants derived from `sin`.
pub const SINE_TABLE: [u32; ROUNDS * STEPS_PER_ROUND] = [
    // Round 1
    0xD76A_A478, 0xE8C7_B756, 0x2420_70DB, 0xC1BD_CEEE,
    0xF57C_0FAF, 0x4787_C62A, 0xA830_4613, 0xFD46_9501,
    0x6980_98D8, 0x8B44_F7AF, 0xFFFF_5BB1, 0x895C_D7BE,
    0x6B90_1122, 0xFD98_7193, 0xA679_438E, 0x49B4_0821,
    // Round 2
    0xF61E_2562, 0xC040_B340, 0x265E_5A51, 0xE9B6_C7AA,
    0xD62F_105D, 0x0244_1453, 0xD8A1_E681, 0xE7D3_FBC8,
    0x21E1_CDE6, 0xC337_07D6, 0xF4D5_0D87, 0x455A_14ED,
    0xA9E3_E905, 0xFCEF_A3F8, 0x676F_02D9, 0x8D2A_4C8A,
    // Round 3
    0xFFFA_3942, 0x8771_F681, 0x6D9D_6122, 0xFDE5_380C,
    0xA4BE_EA44, 0x4BDE_CFA9, 0xF6BB_4B60, 0xBEBF_BC70,
    0x289B_7EC6, 0xEAA1_27FA, 0xD4EF_3085, 0x0488_1D05,
    0xD9D4_D039, 0xE6DB_99E5, 0x1FA2_7CF8, 0xC4AC_5665,
    // Round 4
    0xF429_2244, 0x432A_FF97, 0xAB94_23A7, 0xFC93_A039,
    0x655B_59C3, 0x8F0C_CC92, 0xFFEF_F47D, 0x8584_5DD1,
    0x6FA8_7E4F, 0xFE2C_E6E0, 0xA301_4314, 0x4E08_11A1,
    0xF753_7E82, 0xBD3A_F235, 0x2AD7_D2BB, 0xEB86_D391,
];
