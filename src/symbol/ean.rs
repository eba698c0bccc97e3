//! # EAN Family
//!
//! EAN-13, EAN-8, EAN-14 and JAN share one assembly routine driven by an
//! [`EanLayout`]:
//!
//! | Layout | Digits | Check | Left parity | Left | Right |
//! |--------|--------|-------|-------------|------|-------|
//! | [`EAN13`] | 12 + 1 | [`checksum::ean13`] | by first digit | 6 | 6 |
//! | [`EAN8`] | 7 + 1 | [`checksum::ean8`] | all A | 4 | 4 |
//! | [`EAN14`] | 13 + 1 | [`checksum::ean14`] | by first digit | 6 | 7 |
//! | [`JAN`] | 12 + 1 | [`checksum::ean13`] | by first digit | 6 | 6 |
//!
//! When the left parity is selected by the first digit, that digit is not
//! encoded as bars; it is implied by the A/B mix of the left group.
//!
//! ## Pattern
//!
//! ```text
//! EAN-13:  101 │ 6 × 7 (A/B) │ 01010 │ 6 × 7 (C) │ 101    = 95 modules
//! EAN-8:   101 │ 4 × 7 (A)   │ 01010 │ 4 × 7 (C) │ 101    = 67 modules
//! ```

use std::fmt;

use crate::addon::Addon;
use crate::charset::ean::LEFT_PATTERN;
use crate::charset::{self, guard_bars, Class, EDGE, MIDDLE};
use crate::checksum;
use crate::error::{BarcodeError, Result};

use super::{Barcode, SymbolOptions};

/// How the code set of each left-group digit is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftParity {
    /// Every left digit uses the same code set.
    Fixed(Class),
    /// The first digit selects a row of [`LEFT_PATTERN`] and is not encoded.
    ByFirstDigit,
}

impl LeftParity {
    fn class(self, first: u8, position: usize) -> Class {
        match self {
            LeftParity::Fixed(class) => class,
            LeftParity::ByFirstDigit => LEFT_PATTERN[usize::from(first)][position],
        }
    }
}

/// Static description of one EAN-family symbology.
pub struct EanLayout {
    /// Display name
    pub name: &'static str,
    /// Display name in guard-bar mode
    pub guard_name: &'static str,
    /// Pre-checksum digit count
    pub digits: usize,
    /// Check digit algorithm
    pub checksum: fn(&str) -> Result<u8>,
    /// Left-group code set selection
    pub left_parity: LeftParity,
    /// Number of digits encoded left of the middle guard
    pub left_len: usize,
}

impl fmt::Debug for EanLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EanLayout")
            .field("name", &self.name)
            .field("digits", &self.digits)
            .field("left_parity", &self.left_parity)
            .field("left_len", &self.left_len)
            .finish_non_exhaustive()
    }
}

pub static EAN13: EanLayout = EanLayout {
    name: "EAN-13",
    guard_name: "EAN-13 with guards",
    digits: 12,
    checksum: checksum::ean13,
    left_parity: LeftParity::ByFirstDigit,
    left_len: 6,
};

pub static EAN8: EanLayout = EanLayout {
    name: "EAN-8",
    guard_name: "EAN-8 with guards",
    digits: 7,
    checksum: checksum::ean8,
    left_parity: LeftParity::Fixed(Class::A),
    left_len: 4,
};

pub static EAN14: EanLayout = EanLayout {
    name: "EAN-14",
    guard_name: "EAN-14 with guards",
    digits: 13,
    checksum: checksum::ean14,
    left_parity: LeftParity::ByFirstDigit,
    left_len: 6,
};

pub static JAN: EanLayout = EanLayout {
    name: "JAN",
    guard_name: "JAN with guards",
    digits: 12,
    checksum: checksum::ean13,
    left_parity: LeftParity::ByFirstDigit,
    left_len: 6,
};

/// JAN country prefixes.
const JAN_COUNTRY_CODES: [std::ops::RangeInclusive<u16>; 2] = [450..=459, 490..=499];

/// An EAN-family symbol.
#[derive(Debug, Clone)]
pub struct Ean {
    layout: &'static EanLayout,
    code: String,
    addon: Option<Addon>,
    guardbar: bool,
}

impl Ean {
    /// Validate `code` against `layout` and build a symbol.
    pub fn new(layout: &'static EanLayout, code: &str, options: &SymbolOptions) -> Result<Self> {
        let code = super::canonical(
            layout.name,
            code,
            layout.digits,
            options.no_checksum,
            layout.checksum,
        )?;
        let addon = options.parse_addon()?;
        Ok(Self {
            layout,
            code,
            addon,
            guardbar: options.guardbar,
        })
    }

    /// EAN-13 from 12 digits (or 13 with a check digit).
    pub fn ean13(code: &str, options: &SymbolOptions) -> Result<Self> {
        Self::new(&EAN13, code, options)
    }

    /// EAN-8 from 7 digits (or 8 with a check digit).
    pub fn ean8(code: &str, options: &SymbolOptions) -> Result<Self> {
        Self::new(&EAN8, code, options)
    }

    /// EAN-14 from 13 digits (or 14 with a check digit).
    pub fn ean14(code: &str, options: &SymbolOptions) -> Result<Self> {
        Self::new(&EAN14, code, options)
    }

    /// JAN: an EAN-13 whose country prefix is 450-459 or 490-499.
    pub fn jan(code: &str, options: &SymbolOptions) -> Result<Self> {
        let ean = Self::new(&JAN, code, options)?;
        let country: u16 = charset::digits(&ean.code[..3])
            .fold(0, |acc, d| acc * 10 + u16::from(d));
        if !JAN_COUNTRY_CODES.iter().any(|range| range.contains(&country)) {
            return Err(BarcodeError::WrongCountryCode(ean.code[..3].to_string()));
        }
        Ok(ean)
    }

    /// Canonical code, check digit included, without addon.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn guardbar(&self) -> bool {
        self.guardbar
    }

    pub fn layout(&self) -> &'static EanLayout {
        self.layout
    }

    /// Assemble the main symbol, without addon.
    fn build_main(&self) -> String {
        let layout = self.layout;
        let edge = guard_bars(EDGE, self.guardbar);
        let middle = guard_bars(MIDDLE, self.guardbar);

        let digits: Vec<u8> = charset::digits(&self.code).collect();
        let (first, encoded) = match layout.left_parity {
            LeftParity::ByFirstDigit => (digits[0], &digits[1..]),
            LeftParity::Fixed(_) => (0, &digits[..]),
        };
        let (left, right) = encoded.split_at(layout.left_len);

        let mut code = String::with_capacity(2 * EDGE.len() + MIDDLE.len() + 7 * encoded.len());
        code.push_str(&edge);
        for (i, &digit) in left.iter().enumerate() {
            code.push_str(charset::encode(layout.left_parity.class(first, i), digit));
        }
        code.push_str(&middle);
        for &digit in right {
            code.push_str(charset::encode(Class::C, digit));
        }
        code.push_str(&edge);
        code
    }

    /// Printed code; guard-bar mode splits the digit groups and marks the
    /// guards (`"5 901234 123457 >"`, `"< 9638 5074 >"`).
    fn display_code(&self) -> String {
        if !self.guardbar {
            return self.code.clone();
        }
        let left_len = self.layout.left_len;
        match self.layout.left_parity {
            LeftParity::ByFirstDigit => format!(
                "{} {} {} >",
                &self.code[..1],
                &self.code[1..=left_len],
                &self.code[left_len + 1..]
            ),
            LeftParity::Fixed(_) => {
                format!("< {} {} >", &self.code[..left_len], &self.code[left_len..])
            }
        }
    }
}

impl Barcode for Ean {
    fn name(&self) -> &'static str {
        if self.guardbar {
            self.layout.guard_name
        } else {
            self.layout.name
        }
    }

    fn build(&self) -> Vec<String> {
        let mut code = self.build_main();
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
                '0' => ' ',
                _ => '|',
            })
            .collect()
    }

    fn addon(&self) -> Option<&Addon> {
        self.addon.as_ref()
    }
}

impl fmt::Display for Ean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.addon {
            Some(addon) => write!(f, "{} {}", self.code, addon),
            None => f.write_str(&self.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> SymbolOptions {
        SymbolOptions::default()
    }

    #[test]
    fn test_ean13_checksum() {
        let ean = Ean::ean13("400614457735", &opts()).unwrap();
        assert_eq!(ean.full_code(), "4006144577350");
        assert_eq!(ean.name(), "EAN-13");
    }

    #[test]
    fn test_ean8_checksum() {
        let ean = Ean::ean8("6032299", &opts()).unwrap();
        assert_eq!(ean.full_code(), "60322999");
    }

    #[test]
    fn test_ean14_checksum() {
        let ean = Ean::ean14("1234567891258", &opts()).unwrap();
        assert_eq!(ean.full_code(), "12345678912589");
    }

    #[test]
    fn test_jan_checksum() {
        let jan = Ean::jan("491400614457", &opts()).unwrap();
        assert_eq!(jan.full_code(), "4914006144575");
        assert_eq!(jan.name(), "JAN");
    }

    #[test]
    fn test_jan_wrong_country() {
        let err = Ean::jan("400614457735", &opts()).unwrap_err();
        assert!(matches!(err, BarcodeError::WrongCountryCode(c) if c == "400"));
        assert!(Ean::jan("460000000000", &opts()).is_err());
        assert!(Ean::jan("450000000000", &opts()).is_ok());
        assert!(Ean::jan("499000000000", &opts()).is_ok());
    }

    #[test]
    fn test_pattern_lengths() {
        let ean13 = Ean::ean13("5901234123457", &opts()).unwrap();
        assert_eq!(ean13.build()[0].len(), 95);
        let ean8 = Ean::ean8("9638507", &opts()).unwrap();
        assert_eq!(ean8.build()[0].len(), 67);
        // EAN-14 encodes its extra digit in the right group
        let ean14 = Ean::ean14("1234567891258", &opts()).unwrap();
        assert_eq!(ean14.build()[0].len(), 102);
    }

    #[test]
    fn test_build_is_repeatable() {
        let ean = Ean::ean13("5901234123457", &opts().addon("12")).unwrap();
        assert_eq!(ean.build(), ean.build());
        assert_eq!(ean.build().len(), 1);
    }

    #[test]
    fn test_first_digit_selects_parity() {
        // First digit 0: left group is all set A, same bits as UPC-A
        let ean = Ean::ean13("0012345678905", &opts()).unwrap();
        let pattern = &ean.build()[0];
        assert_eq!(&pattern[3..10], "0001101"); // 0 in set A
        assert_eq!(&pattern[10..17], "0011001"); // 1 in set A
    }

    #[test]
    fn test_guardbar_marks_guards_only() {
        let plain = Ean::ean13("5901234123457", &opts()).unwrap().build().remove(0);
        let guarded = Ean::ean13("5901234123457", &opts().guardbar(true))
            .unwrap()
            .build()
            .remove(0);
        assert_eq!(plain.len(), guarded.len());
        assert_eq!(guarded.replace('G', "1"), plain);
        assert!(guarded.starts_with("G0G"));
        assert!(guarded.ends_with("G0G"));
        assert_eq!(&guarded[45..50], "0G0G0");
    }

    #[test]
    fn test_guardbar_full_code() {
        let ean13 = Ean::ean13("5901234123457", &opts().guardbar(true)).unwrap();
        assert_eq!(ean13.full_code(), "5 901234 123457 >");
        assert_eq!(ean13.name(), "EAN-13 with guards");

        let ean8 = Ean::ean8("9638507", &opts().guardbar(true).addon("05")).unwrap();
        assert_eq!(ean8.full_code(), "< 9638 5074 > 05");
        assert_eq!(ean8.name(), "EAN-8 with guards");
    }

    #[test]
    fn test_addon_in_display() {
        let ean = Ean::ean13("5901234123457", &opts().addon("52495")).unwrap();
        assert_eq!(ean.full_code(), "5901234123457 52495");
        assert_eq!(ean.to_string(), "5901234123457 52495");
        assert_eq!(ean.addon().map(Addon::as_str), Some("52495"));
        assert_eq!(ean.build()[0].len(), 95 + 56);
    }

    #[test]
    fn test_empty_addon_is_absent() {
        let ean = Ean::ean13("5901234123457", &opts().addon("   ")).unwrap();
        assert!(ean.addon().is_none());
        assert_eq!(ean.full_code(), "5901234123457");
    }

    #[test]
    fn test_invalid_addon() {
        assert!(matches!(
            Ean::ean13("5901234123457", &opts().addon("1A")),
            Err(BarcodeError::InvalidAddonCharacter(_))
        ));
        assert!(matches!(
            Ean::ean8("40267708", &opts().addon("123")),
            Err(BarcodeError::InvalidAddonLength(3))
        ));
    }

    #[test]
    fn test_invalid_code() {
        assert!(matches!(
            Ean::ean13("59012341234A", &opts()),
            Err(BarcodeError::InvalidCharacter { symbology: "EAN-13", .. })
        ));
        assert!(matches!(
            Ean::ean13("59012341", &opts()),
            Err(BarcodeError::WrongLength { expected: 12, found: 8, .. })
        ));
    }

    #[test]
    fn test_to_ascii() {
        let ean = Ean::ean8("9638507", &opts().guardbar(true)).unwrap();
        let ascii = ean.to_ascii();
        assert_eq!(ascii.len(), 67);
        assert!(ascii.starts_with("| |"));
        assert!(ascii.chars().all(|c| c == '|' || c == ' '));
    }
}
