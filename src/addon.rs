//! # EAN-2 / EAN-5 Addons
//!
//! Supplemental symbols printed to the right of a main symbol, typically an
//! issue number (EAN-2, periodicals) or a price (EAN-5, books).
//!
//! ## Layout
//!
//! ```text
//! ┌────────────┬───────┬─────────┬────┬─────────┬────┬───
//! │ quiet zone │ start │ digit 1 │ 01 │ digit 2 │ 01 │ ...
//! │  9 modules │  1011 │  7 mod. │    │  7 mod. │    │
//! └────────────┴───────┴─────────┴────┴─────────┴────┴───
//! ```
//!
//! ## Parity
//!
//! | Addon | Row index |
//! |-------|-----------|
//! | EAN-2 | value mod 4 |
//! | EAN-5 | Σ digit × (3, 9, 3, 9, 3) mod 10 |

use std::fmt;

use crate::charset::addons::{
    ADDON2_PARITY, ADDON5_PARITY, ADDON_QUIET_ZONE, ADDON_SEPARATOR, ADDON_START,
};
use crate::charset::{self, Class};
use crate::error::{BarcodeError, Result};

/// A validated 2 or 5 digit addon payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Addon(String);

impl Addon {
    /// Normalize and validate an optional raw addon.
    ///
    /// Surrounding whitespace is stripped. `None`, an empty string and an
    /// all-whitespace string all mean "no addon".
    ///
    /// ## Example
    ///
    /// ```
    /// use eancode::addon::Addon;
    ///
    /// assert_eq!(Addon::parse(Some("  12 ")).unwrap().unwrap().as_str(), "12");
    /// assert!(Addon::parse(Some("   ")).unwrap().is_none());
    /// assert!(Addon::parse(Some("123")).is_err());
    /// ```
    pub fn parse(raw: Option<&str>) -> Result<Option<Addon>> {
        let Some(addon) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        if !addon.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BarcodeError::InvalidAddonCharacter(addon.to_string()));
        }
        match addon.len() {
            2 | 5 => Ok(Some(Addon(addon.to_string()))),
            n => Err(BarcodeError::InvalidAddonLength(n)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Module pattern for this addon, quiet zone included.
    pub fn build(&self) -> String {
        build_addon(&self.0)
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the complete addon pattern (quiet zone, start guard, digits).
///
/// Returns an empty string for an empty addon. Input must already be a
/// validated 2 or 5 digit string; use [`Addon::parse`] for untrusted input.
///
/// # Panics
///
/// Panics if `addon` contains a non-digit character.
pub fn build_addon(addon: &str) -> String {
    if addon.is_empty() {
        return String::new();
    }

    let mut code = String::with_capacity(ADDON_QUIET_ZONE.len() + ADDON_START.len() + addon.len() * 9);
    code.push_str(ADDON_QUIET_ZONE);
    code.push_str(ADDON_START);

    let parity = parity(addon);
    for (i, (class, digit)) in parity.iter().zip(charset::digits(addon)).enumerate() {
        if i > 0 {
            code.push_str(ADDON_SEPARATOR);
        }
        code.push_str(charset::encode(*class, digit));
    }
    code
}

/// Select the parity row for a 2 or 5 digit addon.
fn parity(addon: &str) -> &'static [Class] {
    if addon.len() == 2 {
        let value = charset::digits(addon).fold(0usize, |acc, d| acc * 10 + usize::from(d));
        &ADDON2_PARITY[value % 4]
    } else {
        &ADDON5_PARITY[usize::from(addon5_checksum(addon))]
    }
}

/// EAN-5 parity checksum: digits at even positions weigh 3, odd positions 9.
fn addon5_checksum(addon: &str) -> u8 {
    let sum: u32 = charset::digits(addon)
        .enumerate()
        .map(|(i, d)| u32::from(d) * if i % 2 == 0 { 3 } else { 9 })
        .sum();
    (sum % 10) as u8
}
