//! # UPC-A
//!
//! 11 digits plus a check digit. The first six digits use code set L, the
//! last six code set R:
//!
//! ```text
//! 101 │ 6 × 7 (L) │ 01010 │ 6 × 7 (R) │ 101    = 95 modules
//! ```
//!
//! With `make_ean` the printed code gains a leading `0`, which is how an
//! EAN-13 scanner reports the same bars. The pattern is unchanged.

use std::fmt;

use crate::addon::Addon;
use crate::charset::{self, Class, EDGE, MIDDLE};
use crate::checksum;
use crate::error::Result;

use super::{Barcode, SymbolOptions};

/// Pre-checksum digit count
pub const UPCA_DIGITS: usize = 11;

/// A UPC-A symbol.
#[derive(Debug, Clone)]
pub struct UpcA {
    code: String,
    addon: Option<Addon>,
    make_ean: bool,
}

impl UpcA {
    /// UPC-A from 11 digits (or 12 with a check digit).
    ///
    /// ## Example
    ///
    /// ```
    /// use eancode::symbol::{Barcode, SymbolOptions};
    /// use eancode::symbol::upc::UpcA;
    ///
    /// let upc = UpcA::new("01234567890", &SymbolOptions::default())?;
    /// assert_eq!(upc.full_code(), "012345678905");
    ///
    /// let upc = UpcA::new("01234567890", &SymbolOptions::default().make_ean(true))?;
    /// assert_eq!(upc.full_code(), "0012345678905");
    /// # Ok::<(), eancode::BarcodeError>(())
    /// ```
    pub fn new(code: &str, options: &SymbolOptions) -> Result<Self> {
        let code = super::canonical(
            "UPC-A",
            code,
            UPCA_DIGITS,
            options.no_checksum,
            checksum::upca,
        )?;
        let addon = options.parse_addon()?;
        Ok(Self {
            code,
            addon,
            make_ean: options.make_ean,
        })
    }

    /// Canonical 12-digit code.
    pub fn code(&self) -> &str {
        &self.code
    }

    fn display_code(&self) -> String {
        if self.make_ean {
            format!("0{}", self.code)
        } else {
            self.code.clone()
        }
    }
}

impl Barcode for UpcA {
    fn name(&self) -> &'static str {
        "UPC-A"
    }

    fn build(&self) -> Vec<String> {
        let (left, right) = self.code.split_at(6);

        let mut code = String::with_capacity(95);
        code.push_str(EDGE);
        for digit in charset::digits(left) {
            code.push_str(charset::encode(Class::L, digit));
        }
        code.push_str(MIDDLE);
        for digit in charset::digits(right) {
            code.push_str(charset::encode(Class::R, digit));
        }
        code.push_str(EDGE);

        if let Some(addon) = &self.addon {
            code.push_str(&addon.build());
        }
        vec![code]
    }

    fn full_code(&self) -> String {
        super::with_addon(self.display_code(), self.addon.as_ref())
    }

    fn to_ascii(&self) -> String {
        self.build()
            .concat()
            .chars()
            .map(|c| match c {
                '1' => '|',
                '0' => '_',
                other => other,
            })
            .collect()
    }

    fn addon(&self) -> Option<&Addon> {
        self.addon.as_ref()
    }
}

impl fmt::Display for UpcA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BarcodeError;
    use crate::symbol::ean::Ean;

    #[test]
    fn test_checksum() {
        let upc = UpcA::new("01234567890", &SymbolOptions::default()).unwrap();
        assert_eq!(upc.code(), "012345678905");
        assert_eq!(upc.to_string(), "012345678905");
    }

    #[test]
    fn test_make_ean_display_only() {
        let plain = UpcA::new("04210000526", &SymbolOptions::default()).unwrap();
        let ean = UpcA::new("04210000526", &SymbolOptions::default().make_ean(true)).unwrap();
        assert_eq!(plain.full_code(), "042100005264");
        assert_eq!(ean.full_code(), "0042100005264");
        assert_eq!(plain.build(), ean.build());
    }

    #[test]
    fn test_pattern_matches_zero_prefixed_ean13() {
        let upc = UpcA::new("04210000526", &SymbolOptions::default()).unwrap();
        let ean = Ean::ean13("004210000526", &SymbolOptions::default()).unwrap();
        assert_eq!(upc.build(), ean.build());
        assert_eq!(upc.build()[0].len(), 95);
    }

    #[test]
    fn test_addon() {
        let opts = SymbolOptions::default().addon("12");
        let upc = UpcA::new("04210000526", &opts).unwrap();
        assert_eq!(upc.full_code(), "042100005264 12");
        assert_eq!(upc.build()[0].len(), 95 + 29);
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            UpcA::new("0421000052", &SymbolOptions::default()),
            Err(BarcodeError::WrongLength { symbology: "UPC-A", expected: 11, found: 10 })
        ));
        assert!(matches!(
            UpcA::new("04210000526", &SymbolOptions::default().addon("1234")),
            Err(BarcodeError::InvalidAddonLength(4))
        ));
    }

    #[test]
    fn test_to_ascii() {
        let upc = UpcA::new("01234567890", &SymbolOptions::default()).unwrap();
        let ascii = upc.to_ascii();
        assert!(ascii.starts_with("|_|"));
        assert_eq!(ascii.len(), 95);
    }
}
