//! # Check Digit Algorithms
//!
//! One function per symbology family. Each takes exactly the pre-checksum
//! digits and returns the check digit (or check character for the mod-11
//! families).
//!
//! | Function | Digits | Rule |
//! |----------|--------|------|
//! | [`ean13`] | 12 | mod 10, weights 3/1 from the right |
//! | [`ean8`] | 7 | mod 10, weights 3/1 from the right |
//! | [`ean14`] | 13 | mod 10, weights 3/1 from the left |
//! | [`upca`] | 11 | mod 10, weights 3/1 from the left |
//! | [`isbn10`] | 9 | mod 11, weights 1..9 from the left |
//! | [`issn`] | 7 | mod 11, weights 2..8 from the right, complemented |
//!
//! ## Example
//!
//! ```
//! use eancode::checksum;
//!
//! assert_eq!(checksum::ean13("400614457735").unwrap(), 0);
//! assert_eq!(checksum::upca("01234567890").unwrap(), 5);
//! assert_eq!(checksum::isbn10("376926085").unwrap(), '6');
//! ```

use crate::error::{BarcodeError, Result};

/// Parse `code` into digit values, requiring exactly `expected` digits.
fn values(symbology: &'static str, code: &str, expected: usize) -> Result<Vec<u8>> {
    let found = code.chars().count();
    if found != expected {
        return Err(BarcodeError::InvalidLength { expected, found });
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BarcodeError::InvalidCharacter {
            symbology,
            code: code.to_string(),
        });
    }
    Ok(code.bytes().map(|b| b - b'0').collect())
}

/// GS1 mod 10: the digit next to the check digit weighs 3, then alternating.
fn mod10_from_right(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Map a mod-11 value to its check character (10 is `X`).
fn mod11_char(value: u32) -> char {
    match value {
        10 => 'X',
        v => char::from(b'0' + v as u8),
    }
}

/// EAN-13 check digit over 12 digits.
pub fn ean13(code: &str) -> Result<u8> {
    let digits = values("EAN-13", code, 12)?;
    Ok(mod10_from_right(&digits))
}

/// EAN-8 check digit over 7 digits.
pub fn ean8(code: &str) -> Result<u8> {
    let digits = values("EAN-8", code, 7)?;
    Ok(mod10_from_right(&digits))
}

/// EAN-14 (GTIN-14) check digit over 13 digits.
///
/// Even positions counted from the left (0-indexed) weigh 3.
pub fn ean14(code: &str) -> Result<u8> {
    let digits = values("EAN-14", code, 13)?;
    let even: u32 = digits.iter().step_by(2).map(|&d| u32::from(d)).sum();
    let odd: u32 = digits.iter().skip(1).step_by(2).map(|&d| u32::from(d)).sum();
    Ok(((10 - (even * 3 + odd) % 10) % 10) as u8)
}

/// UPC-A check digit over 11 digits.
///
/// Positions 0, 2, 4, ... (from the left) weigh 3, positions 1, 3, 5, ... weigh 1.
pub fn upca(code: &str) -> Result<u8> {
    let digits = values("UPC-A", code, 11)?;
    let odd: u32 = digits.iter().step_by(2).map(|&d| u32::from(d)).sum();
    let even: u32 = digits.iter().skip(1).step_by(2).map(|&d| u32::from(d)).sum();
    match (odd * 3 + even) % 10 {
        0 => Ok(0),
        check => Ok((10 - check) as u8),
    }
}

/// ISBN-10 check character over 9 digits.
pub fn isbn10(code: &str) -> Result<char> {
    let digits = values("ISBN-10", code, 9)?;
    let sum: u32 = digits
        .iter()
        .zip(1..)
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();
    Ok(mod11_char(sum % 11))
}

/// ISSN check character over 7 digits.
///
/// A remainder of 0 yields `0` (not 11), a remainder of 1 yields `X`.
pub fn issn(code: &str) -> Result<char> {
    let digits = values("ISSN", code, 7)?;
    let sum: u32 = digits
        .iter()
        .rev()
        .zip(2..)
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();
    Ok(mod11_char((11 - sum % 11) % 11))
}
