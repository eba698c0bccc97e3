//! # eancode - EAN/UPC Symbol Encoding
//!
//! eancode turns retail and publishing product numbers into the bar/space
//! module patterns a renderer draws. It provides:
//!
//! - **Check digits**: GS1 mod 10 (EAN, UPC, GTIN-14) and mod 11 (ISBN-10, ISSN)
//! - **Symbols**: EAN-13, EAN-8, EAN-14, JAN, UPC-A, ISBN-13, ISBN-10, ISSN
//! - **Addons**: EAN-2 and EAN-5 supplemental symbols
//! - **Registry**: construct any symbol by name or from a JSON request
//!
//! ## Quick Start
//!
//! ```
//! use eancode::{Barcode, SymbolOptions};
//! use eancode::symbol::ean::Ean;
//!
//! let ean = Ean::ean13("590123412345", &SymbolOptions::default())?;
//! assert_eq!(ean.full_code(), "5901234123457");
//!
//! // One row of '0' (light) and '1' (dark) modules
//! let pattern = &ean.build()[0];
//! assert_eq!(pattern.len(), 95);
//! # Ok::<(), eancode::BarcodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`charset`] | Code set tables and guard patterns |
//! | [`checksum`] | Check digit algorithms |
//! | [`addon`] | EAN-2 / EAN-5 addons |
//! | [`symbol`] | Symbol types and the [`Barcode`] trait |
//! | [`registry`] | Lookup by name, JSON requests |
//! | [`error`] | Error types |

pub mod addon;
pub mod charset;
pub mod checksum;
pub mod error;
pub mod registry;
pub mod symbol;

// Re-exports for convenience
pub use error::BarcodeError;
pub use registry::{by_name, BarcodeRequest, Symbology, SYMBOLOGIES};
pub use symbol::{Barcode, SymbolOptions};
