//! # Symbols
//!
//! Validated, immutable barcode instances. Each constructor runs a single
//! validate → checksum → store sequence; [`Barcode::build`] is a pure read of
//! the stored state and returns the same pattern on every call.
//!
//! ## Modules
//!
//! - [`ean`]: EAN-13, EAN-8, EAN-14 and JAN, sharing one assembly routine
//! - [`upc`]: UPC-A
//! - [`isxn`]: ISBN-13, ISBN-10 and ISSN, each wrapping an EAN-13
//!
//! ## Example
//!
//! ```
//! use eancode::symbol::{Barcode, SymbolOptions};
//! use eancode::symbol::ean::Ean;
//!
//! let ean = Ean::ean13("400614457735", &SymbolOptions::default().addon("52495"))?;
//! assert_eq!(ean.full_code(), "4006144577350 52495");
//!
//! let pattern = &ean.build()[0];
//! assert!(pattern.starts_with("101"));
//! # Ok::<(), eancode::BarcodeError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::addon::Addon;
use crate::error::{BarcodeError, Result};

pub mod ean;
pub mod isxn;
pub mod upc;

/// Interface a renderer consumes.
pub trait Barcode: fmt::Display + Send + Sync {
    /// Symbology display name (e.g. "EAN-13").
    fn name(&self) -> &'static str;

    /// Module patterns, one string per row. Every symbology in this crate
    /// produces exactly one row.
    fn build(&self) -> Vec<String>;

    /// Human-readable code printed under the bars, addon separated by a space.
    fn full_code(&self) -> String;

    /// Debug visualization of the single pattern row.
    fn to_ascii(&self) -> String;

    /// The addon attached to this symbol, if any.
    fn addon(&self) -> Option<&Addon>;
}

/// Per-symbol construction options.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use eancode::symbol::SymbolOptions;
///
/// let opts: SymbolOptions = serde_json::from_str(r#"{"addon": "05"}"#).unwrap();
/// assert_eq!(opts.addon.as_deref(), Some("05"));
/// assert!(!opts.guardbar);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolOptions {
    /// Keep the supplied check digit instead of computing one (EAN family,
    /// UPC-A). A missing check digit becomes `0`.
    pub no_checksum: bool,
    /// Mark guard modules with `G` (EAN family, rendering hint only).
    pub guardbar: bool,
    /// Optional EAN-2 / EAN-5 addon, normalized at construction.
    pub addon: Option<String>,
    /// Prefix the UPC-A display code with `0` (EAN-13 form).
    pub make_ean: bool,
}

impl SymbolOptions {
    /// Keep the supplied check digit.
    pub fn no_checksum(mut self, no_checksum: bool) -> Self {
        self.no_checksum = no_checksum;
        self
    }

    /// Enable guard-bar markers.
    pub fn guardbar(mut self, guardbar: bool) -> Self {
        self.guardbar = guardbar;
        self
    }

    /// Attach an addon.
    pub fn addon(mut self, addon: impl Into<String>) -> Self {
        self.addon = Some(addon.into());
        self
    }

    /// Display UPC-A codes with a leading zero.
    pub fn make_ean(mut self, make_ean: bool) -> Self {
        self.make_ean = make_ean;
        self
    }

    pub(crate) fn parse_addon(&self) -> Result<Option<Addon>> {
        Addon::parse(self.addon.as_deref())
    }
}

/// Validate a primary code of `digits` pre-checksum digits, optionally
/// followed by one check digit, and return the canonical code with its
/// check digit appended.
pub(crate) fn canonical(
    symbology: &'static str,
    raw: &str,
    digits: usize,
    no_checksum: bool,
    checksum: fn(&str) -> Result<u8>,
) -> Result<String> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BarcodeError::InvalidCharacter {
            symbology,
            code: raw.to_string(),
        });
    }
    if raw.len() != digits && raw.len() != digits + 1 {
        return Err(BarcodeError::WrongLength {
            symbology,
            expected: digits,
            found: raw.len(),
        });
    }

    let (base, supplied) = raw.split_at(digits);
    let supplied = supplied.chars().next();
    let check = if no_checksum {
        supplied.unwrap_or('0')
    } else {
        let computed = char::from(b'0' + checksum(base)?);
        warn_check_mismatch(symbology, supplied, computed);
        computed
    };
    Ok(format!("{}{}", base, check))
}

/// Report a supplied check character that is being replaced.
pub(crate) fn warn_check_mismatch(symbology: &str, supplied: Option<char>, computed: char) {
    if let Some(supplied) = supplied {
        if !supplied.eq_ignore_ascii_case(&computed) {
            eprintln!(
                "{}: supplied check digit '{}' does not match computed '{}', using computed",
                symbology, supplied, computed
            );
        }
    }
}

/// Append `" addon"` to `base` when an addon is present.
pub(crate) fn with_addon(base: String, addon: Option<&Addon>) -> String {
    match addon {
        Some(addon) => format!("{} {}", base, addon),
        None => base,
    }
}
