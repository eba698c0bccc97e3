//! # Code Sets
//!
//! Static lookup data mapping digits to their 7-module bar/space patterns,
//! plus the fixed guard sequences shared by every symbology in this crate.
//!
//! ## Modules
//!
//! - [`ean`]: EAN code sets A/B/C and the EAN-13 first-digit parity table
//! - [`upc`]: UPC-A code sets L/R
//! - [`addons`]: EAN-2/EAN-5 parity rows and addon guards
//!
//! ## Module Alphabet
//!
//! | Char | Meaning |
//! |------|---------|
//! | `1` | dark module |
//! | `0` | light module |
//! | `G` | dark guard module (guard-bar mode, rendering hint only) |

use std::borrow::Cow;

use crate::error::{BarcodeError, Result};

pub mod addons;
pub mod ean;
pub mod upc;

/// Edge guard, start and end of a symbol (3 modules)
pub const EDGE: &str = "101";

/// Middle separator between the left and right digit groups (5 modules)
pub const MIDDLE: &str = "01010";

/// Substituted for `1` in guards when guard-bar mode is on.
pub const GUARD: char = 'G';

/// A named code set selecting how a digit is turned into modules.
///
/// `L` and `R` are the UPC names for the same bit patterns as `A` and `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// EAN odd parity (left group)
    A,
    /// EAN even parity (left group)
    B,
    /// EAN right group
    C,
    /// UPC left group
    L,
    /// UPC right group
    R,
}

impl Class {
    /// Single-letter label, as used in parity selector strings.
    pub fn label(self) -> char {
        match self {
            Class::A => 'A',
            Class::B => 'B',
            Class::C => 'C',
            Class::L => 'L',
            Class::R => 'R',
        }
    }

    fn table(self) -> &'static [&'static str; 10] {
        match self {
            Class::A => &ean::CODE_A,
            Class::B => &ean::CODE_B,
            Class::C => &ean::CODE_C,
            Class::L => &upc::CODE_L,
            Class::R => &upc::CODE_R,
        }
    }
}

/// Look up the 7-module pattern for `digit` in code set `class`.
///
/// ## Example
///
/// ```
/// use eancode::charset::{pattern, Class};
///
/// assert_eq!(pattern(Class::A, 0).unwrap(), "0001101");
/// assert_eq!(pattern(Class::R, 9).unwrap(), "1110100");
/// assert!(pattern(Class::B, 10).is_err());
/// ```
pub fn pattern(class: Class, digit: u8) -> Result<&'static str> {
    class
        .table()
        .get(usize::from(digit))
        .copied()
        .ok_or(BarcodeError::InvalidDigit(digit))
}

/// Pattern lookup for digits already validated by a symbol constructor.
#[inline]
pub(crate) fn encode(class: Class, digit: u8) -> &'static str {
    class.table()[usize::from(digit)]
}

/// Return `guard` with its dark modules marked as guard modules when
/// `guardbar` is set. Length and light modules are unchanged.
pub fn guard_bars(guard: &'static str, guardbar: bool) -> Cow<'static, str> {
    if guardbar {
        Cow::Owned(guard.replace('1', &GUARD.to_string()))
    } else {
        Cow::Borrowed(guard)
    }
}

/// Iterate the numeric values of an ASCII digit string.
#[inline]
pub(crate) fn digits(code: &str) -> impl Iterator<Item = u8> + '_ {
    code.bytes().map(|b| b - b'0')
}
