//! # ISBN and ISSN
//!
//! Book and serial numbers are printed as EAN-13 symbols. Each type here owns
//! its own display number and a separately constructed [`Ean`]:
//!
//! | Type | Accepts | EAN-13 digits |
//! |------|---------|---------------|
//! | [`Isbn13`] | 12-13 digits starting 978/979 | as given |
//! | [`Isbn10`] | 9 digits (+ check char) | `978` + 9 digits |
//! | [`Issn`] | 7 digits (+ check char), or 12-13 digits starting 977 | `977` + 7 digits + 2 sequence digits |
//!
//! The ISBN-10 and ISSN mod-11 check characters are for display only; the
//! symbol always carries its own EAN-13 check digit. Hyphens are ignored.
//!
//! ## Example
//!
//! ```
//! use eancode::symbol::{Barcode, SymbolOptions};
//! use eancode::symbol::isxn::{Isbn10, Issn};
//!
//! let isbn = Isbn10::new("3-12-517154-7", &SymbolOptions::default())?;
//! assert_eq!(isbn.to_string(), "3125171547");
//! assert_eq!(isbn.full_code(), "9783125171541");
//!
//! let issn = Issn::new("0317-8471", &SymbolOptions::default().addon("05"))?;
//! assert_eq!(issn.to_string(), "03178471 05");
//! assert_eq!(issn.full_code(), "9770317847001 05");
//! # Ok::<(), eancode::BarcodeError>(())
//! ```

use std::fmt;

use crate::addon::Addon;
use crate::checksum;
use crate::error::{BarcodeError, Result};

use super::ean::Ean;
use super::{Barcode, SymbolOptions};

/// ISBN-10 source digits, check character excluded
const ISBN10_DIGITS: usize = 9;

/// ISSN source digits, check character excluded
const ISSN_DIGITS: usize = 7;

fn strip_hyphens(code: &str) -> String {
    code.chars().filter(|&c| c != '-').collect()
}

/// Split `code` into its leading `digits` and an optional trailing check
/// character (`0`-`9` or `X`).
fn split_check(symbology: &'static str, code: &str, digits: usize) -> Result<(String, Option<char>)> {
    let len = code.chars().count();
    if len != digits && len != digits + 1 {
        return Err(BarcodeError::WrongLength {
            symbology,
            expected: digits,
            found: len,
        });
    }
    let base: String = code.chars().take(digits).collect();
    let supplied = code.chars().nth(digits);
    let valid_check = supplied.is_none_or(|c| c.is_ascii_digit() || c.eq_ignore_ascii_case(&'X'));
    if !base.bytes().all(|b| b.is_ascii_digit()) || !valid_check {
        return Err(BarcodeError::InvalidCharacter {
            symbology,
            code: code.to_string(),
        });
    }
    Ok((base, supplied))
}

/// Options for the wrapped EAN-13: the EAN check digit is always computed.
fn ean_options(options: &SymbolOptions) -> SymbolOptions {
    SymbolOptions {
        no_checksum: false,
        ..options.clone()
    }
}

// ============================================================================
// ISBN-13
// ============================================================================

/// An ISBN-13: an EAN-13 in the 978/979 "Bookland" prefix.
#[derive(Debug, Clone)]
pub struct Isbn13 {
    ean: Ean,
}

impl Isbn13 {
    pub fn new(isbn: &str, options: &SymbolOptions) -> Result<Self> {
        let isbn = strip_hyphens(isbn);
        if !(isbn.starts_with("978") || isbn.starts_with("979")) {
            return Err(BarcodeError::WrongPrefix(isbn));
        }
        let ean = Ean::ean13(&isbn, options)?;
        Ok(Self { ean })
    }

    pub fn ean(&self) -> &Ean {
        &self.ean
    }
}

impl Barcode for Isbn13 {
    fn name(&self) -> &'static str {
        "ISBN-13"
    }

    fn build(&self) -> Vec<String> {
        self.ean.build()
    }

    fn full_code(&self) -> String {
        self.ean.full_code()
    }

    fn to_ascii(&self) -> String {
        self.ean.to_ascii()
    }

    fn addon(&self) -> Option<&Addon> {
        self.ean.addon()
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ean, f)
    }
}

// ============================================================================
// ISBN-10
// ============================================================================

/// An ISBN-10, printed as the EAN-13 `978` + its first nine digits.
#[derive(Debug, Clone)]
pub struct Isbn10 {
    isbn10: String,
    ean: Ean,
}

impl Isbn10 {
    pub fn new(isbn: &str, options: &SymbolOptions) -> Result<Self> {
        let isbn = strip_hyphens(isbn);
        let (base, supplied) = split_check("ISBN-10", &isbn, ISBN10_DIGITS)?;
        let check = checksum::isbn10(&base)?;
        super::warn_check_mismatch("ISBN-10", supplied, check);

        let ean = Ean::ean13(&format!("978{}", base), &ean_options(options))?;
        Ok(Self {
            isbn10: format!("{}{}", base, check),
            ean,
        })
    }

    /// The 10-character ISBN, mod-11 check character included.
    pub fn isbn10(&self) -> &str {
        &self.isbn10
    }

    pub fn ean(&self) -> &Ean {
        &self.ean
    }
}

impl Barcode for Isbn10 {
    fn name(&self) -> &'static str {
        "ISBN-10"
    }

    fn build(&self) -> Vec<String> {
        self.ean.build()
    }

    fn full_code(&self) -> String {
        self.ean.full_code()
    }

    fn to_ascii(&self) -> String {
        self.ean.to_ascii()
    }

    fn addon(&self) -> Option<&Addon> {
        self.ean.addon()
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::with_addon(self.isbn10.clone(), self.addon()))
    }
}

// ============================================================================
// ISSN
// ============================================================================

/// An ISSN, printed as the EAN-13 `977` + 7 ISSN digits + 2 sequence digits.
///
/// The short form (`0317-8471`) uses sequence digits `00`. The full EAN-13
/// form (`9771234567898`) keeps its sequence digits (positions 11-12).
#[derive(Debug, Clone)]
pub struct Issn {
    issn: String,
    sequence: String,
    ean: Ean,
}

impl Issn {
    pub fn new(issn: &str, options: &SymbolOptions) -> Result<Self> {
        let issn = strip_hyphens(issn);
        let (base, sequence, supplied) = if issn.len() >= 12 && issn.starts_with("977") {
            let (base, sequence) = Self::split_full_form(&issn)?;
            (base, sequence, None)
        } else {
            let (base, supplied) = split_check("ISSN", &issn, ISSN_DIGITS)?;
            (base, "00".to_string(), supplied)
        };

        let check = checksum::issn(&base)?;
        super::warn_check_mismatch("ISSN", supplied, check);
        let ean = Ean::ean13(&format!("977{}{}", base, sequence), &ean_options(options))?;
        Ok(Self {
            issn: format!("{}{}", base, check),
            sequence,
            ean,
        })
    }

    /// Split `977` + 7 ISSN digits + 2 sequence digits (+ EAN check digit).
    fn split_full_form(code: &str) -> Result<(String, String)> {
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BarcodeError::InvalidCharacter {
                symbology: "ISSN",
                code: code.to_string(),
            });
        }
        if code.len() > 13 {
            return Err(BarcodeError::WrongLength {
                symbology: "ISSN",
                expected: 13,
                found: code.len(),
            });
        }
        Ok((code[3..10].to_string(), code[10..12].to_string()))
    }

    /// The 8-character ISSN, mod-11 check character included.
    pub fn issn(&self) -> &str {
        &self.issn
    }

    /// The two EAN-13 sequence (issue variant) digits.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn ean(&self) -> &Ean {
        &self.ean
    }
}

impl Barcode for Issn {
    fn name(&self) -> &'static str {
        "ISSN"
    }

    fn build(&self) -> Vec<String> {
        self.ean.build()
    }

    fn full_code(&self) -> String {
        self.ean.full_code()
    }

    fn to_ascii(&self) -> String {
        self.ean.to_ascii()
    }

    fn addon(&self) -> Option<&Addon> {
        self.ean.addon()
    }
}

impl fmt::Display for Issn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::with_addon(self.issn.clone(), self.addon()))
    }
}
