//! EAN code sets.
//!
//! Set A is odd parity, set B is even parity (A mirrored and inverted), set C
//! is the right-hand set (A inverted).

use super::Class::{self, A, B};

pub const CODE_A: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011",
    "0110001", "0101111", "0111011", "0110111", "0001011",
];

pub const CODE_B: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101",
    "0111001", "0000101", "0010001", "0001001", "0010111",
];

pub const CODE_C: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100",
    "1001110", "1010000", "1000100", "1001000", "1110100",
];

/// EAN-13 parity of digits 2-7, indexed by the first (implicit) digit.
pub const LEFT_PATTERN: [[Class; 6]; 10] = [
    [A, A, A, A, A, A],
    [A, A, B, A, B, B],
    [A, A, B, B, A, B],
    [A, A, B, B, B, A],
    [A, B, A, A, B, B],
    [A, B, B, A, A, B],
    [A, B, B, B, A, A],
    [A, B, A, B, A, B],
    [A, B, A, B, B, A],
    [A, B, B, A, B, A],
];
