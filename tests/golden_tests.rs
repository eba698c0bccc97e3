//! # Golden Tests
//!
//! These tests pin the exact module patterns produced for known codes.
//!
//! ## Test Coverage
//!
//! - **Literal vectors**: full patterns for EAN-13 (plain and guard-bar),
//!   EAN-8, UPC-A and the EAN-2 / EAN-5 addons.
//! - **Cross-check**: EAN-13, EAN-8 and UPC-A patterns compared against the
//!   independent `barcoders` encoder.
//! - **Published check digits**: the reference numbers used across the
//!   GS1, ISBN and ISSN literature.

use barcoders::sym::ean8::EAN8;
use barcoders::sym::ean13::EAN13;
use eancode::symbol::ean::Ean;
use eancode::symbol::isxn::{Isbn10, Isbn13, Issn};
use eancode::symbol::upc::UpcA;
use eancode::{by_name, Barcode, SymbolOptions};
use pretty_assertions::assert_eq;

const EAN13_5901234123457: &str = "10100010110100111011001100100110111101001110101010110011011011001000010101110010011101000100101";

const EAN13_GUARD_5901234123457: &str = "G0G0001011010011101100110010011011110100111010G0G0110011011011001000010101110010011101000100G0G";

const EAN8_96385074: &str = "1010001011010111101111010110111010101001110111001010001001011100101";

const UPCA_042100005264: &str = "10100011010100011001001100110010001101000110101010111001011100101001110110110010100001011100101";

const ADDON_12: &str = "00000000010110011001010010011";

const ADDON_05: &str = "00000000010110001101010111001";

const ADDON_52495: &str = "00000000010110111001010010011010011101010001011010110001";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn defaults() -> SymbolOptions {
    SymbolOptions::default()
}

/// Render a `barcoders` module vector in this crate's alphabet.
fn modules_to_string(modules: &[u8]) -> String {
    modules.iter().map(|&m| if m == 1 { '1' } else { '0' }).collect()
}

fn single_row(barcode: &dyn Barcode) -> String {
    let rows = barcode.build();
    assert_eq!(rows.len(), 1);
    rows.into_iter().next().unwrap_or_default()
}

// ============================================================================
// LITERAL VECTORS
// ============================================================================

#[test]
fn golden_ean13() {
    let ean = Ean::ean13("5901234123457", &defaults()).unwrap();
    assert_eq!(single_row(&ean), EAN13_5901234123457);
}

#[test]
fn golden_ean13_guardbar() {
    let ean = Ean::ean13("5901234123457", &defaults().guardbar(true)).unwrap();
    assert_eq!(single_row(&ean), EAN13_GUARD_5901234123457);
}

#[test]
fn golden_ean8() {
    let ean = Ean::ean8("9638507", &defaults()).unwrap();
    assert_eq!(ean.full_code(), "96385074");
    assert_eq!(single_row(&ean), EAN8_96385074);
}

#[test]
fn golden_upca() {
    let upc = UpcA::new("04210000526", &defaults()).unwrap();
    assert_eq!(upc.full_code(), "042100005264");
    assert_eq!(single_row(&upc), UPCA_042100005264);
}

#[test]
fn golden_ean13_with_addon2() {
    let ean = Ean::ean13("5901234123457", &defaults().addon("12")).unwrap();
    assert_eq!(single_row(&ean), format!("{}{}", EAN13_5901234123457, ADDON_12));
}

#[test]
fn golden_ean8_with_addon2() {
    let ean = Ean::ean8("96385074", &defaults().addon("05")).unwrap();
    assert_eq!(single_row(&ean), format!("{}{}", EAN8_96385074, ADDON_05));
}

#[test]
fn golden_ean13_with_addon5() {
    let ean = Ean::ean13("5901234123457", &defaults().addon("52495")).unwrap();
    assert_eq!(single_row(&ean), format!("{}{}", EAN13_5901234123457, ADDON_52495));
}

#[test]
fn golden_upca_with_addon5() {
    let upc = UpcA::new("04210000526", &defaults().addon("52495")).unwrap();
    assert_eq!(single_row(&upc), format!("{}{}", UPCA_042100005264, ADDON_52495));
}

#[test]
fn golden_addons_standalone() {
    assert_eq!(eancode::addon::build_addon("12"), ADDON_12);
    assert_eq!(eancode::addon::build_addon("05"), ADDON_05);
    assert_eq!(eancode::addon::build_addon("52495"), ADDON_52495);
}

// ============================================================================
// CROSS-CHECK AGAINST BARCODERS
// ============================================================================

#[test]
fn cross_check_ean13() {
    for code in ["590123412345", "400614457735", "978376926085", "491400614457", "000000000000"] {
        let ours = Ean::ean13(code, &defaults()).unwrap();
        let theirs = EAN13::new(code).unwrap();
        assert_eq!(single_row(&ours), modules_to_string(&theirs.encode()), "code {}", code);
    }
}

#[test]
fn cross_check_ean8() {
    for code in ["9638507", "6032299", "4026770", "0000000"] {
        let ours = Ean::ean8(code, &defaults()).unwrap();
        let theirs = EAN8::new(code).unwrap();
        assert_eq!(single_row(&ours), modules_to_string(&theirs.encode()), "code {}", code);
    }
}

#[test]
fn cross_check_upca_as_zero_prefixed_ean13() {
    for code in ["04210000526", "01234567890", "98765432109"] {
        let ours = UpcA::new(code, &defaults()).unwrap();
        let theirs = EAN13::new(&format!("0{}", code)).unwrap();
        assert_eq!(single_row(&ours), modules_to_string(&theirs.encode()), "code {}", code);
    }
}

// ============================================================================
// PUBLISHED CHECK DIGITS
// ============================================================================

#[test]
fn published_full_codes() {
    let cases: &[(&str, &str, &str)] = &[
        ("ean13", "400614457735", "4006144577350"),
        ("ean8", "6032299", "60322999"),
        ("jan", "491400614457", "4914006144575"),
        ("ean14", "1234567891258", "12345678912589"),
        ("upca", "01234567890", "012345678905"),
        ("isbn13", "978376926085", "9783769260854"),
        ("isbn10", "376926085", "9783769260854"),
        ("issn", "0317-8471", "9770317847001"),
        ("issn", "9771234567898", "9771234567898"),
    ];
    for (name, code, expected) in cases {
        let barcode = by_name(name, code, &defaults()).unwrap();
        assert_eq!(barcode.full_code(), *expected, "{} {}", name, code);
    }
}

#[test]
fn display_numbers() {
    assert_eq!(Isbn10::new("376926085", &defaults()).unwrap().isbn10(), "3769260856");
    assert_eq!(Issn::new("0317-8471", &defaults()).unwrap().issn(), "03178471");
    assert_eq!(
        Isbn13::new("978-3-16-148410-0", &defaults()).unwrap().to_string(),
        "9783161484100"
    );
}

#[test]
fn adapters_encode_their_ean13() {
    let isbn = Isbn10::new("3-12-517154-7", &defaults()).unwrap();
    let ean = Ean::ean13("978312517154", &defaults()).unwrap();
    assert_eq!(isbn.build(), ean.build());

    let issn = Issn::new("0317-8471", &defaults()).unwrap();
    let ean = Ean::ean13("977031784700", &defaults()).unwrap();
    assert_eq!(issn.build(), ean.build());
}
