//! # Symbology Registry
//!
//! Look up a symbology by name and construct it from a code and options,
//! either directly or from a JSON request.
//!
//! ## Example
//!
//! ```
//! use eancode::registry::BarcodeRequest;
//!
//! let json = r#"{"symbology": "issn", "code": "0317-8471", "addon": "05"}"#;
//!
//! let barcode = BarcodeRequest::from_json(json)?.build()?;
//! assert_eq!(barcode.name(), "ISSN");
//! assert_eq!(barcode.full_code(), "9770317847001 05");
//! # Ok::<(), eancode::BarcodeError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{BarcodeError, Result};
use crate::symbol::ean::Ean;
use crate::symbol::isxn::{Isbn10, Isbn13, Issn};
use crate::symbol::upc::UpcA;
use crate::symbol::{Barcode, SymbolOptions};

/// All accepted symbology names, in display order.
pub const SYMBOLOGIES: &[&str] = &[
    "ean13",
    "ean13-guard",
    "ean8",
    "ean8-guard",
    "ean14",
    "jan",
    "upca",
    "isbn13",
    "isbn10",
    "issn",
];

/// A symbology selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symbology {
    Ean13,
    Ean13Guard,
    Ean8,
    Ean8Guard,
    Ean14,
    Jan,
    Upca,
    Isbn13,
    Isbn10,
    Issn,
}

impl Symbology {
    /// Resolve a name from [`SYMBOLOGIES`] (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        let symbology = match name.to_lowercase().as_str() {
            "ean13" | "ean" | "gtin" => Symbology::Ean13,
            "ean13-guard" => Symbology::Ean13Guard,
            "ean8" => Symbology::Ean8,
            "ean8-guard" => Symbology::Ean8Guard,
            "ean14" => Symbology::Ean14,
            "jan" => Symbology::Jan,
            "upca" | "upc" => Symbology::Upca,
            "isbn13" | "isbn" => Symbology::Isbn13,
            "isbn10" => Symbology::Isbn10,
            "issn" => Symbology::Issn,
            _ => return Err(BarcodeError::UnknownSymbology(name.to_string())),
        };
        Ok(symbology)
    }

    /// Construct a symbol of this symbology.
    pub fn build(self, code: &str, options: &SymbolOptions) -> Result<Box<dyn Barcode>> {
        let barcode: Box<dyn Barcode> = match self {
            Symbology::Ean13 => Box::new(Ean::ean13(code, options)?),
            Symbology::Ean13Guard => Box::new(Ean::ean13(code, &options.clone().guardbar(true))?),
            Symbology::Ean8 => Box::new(Ean::ean8(code, options)?),
            Symbology::Ean8Guard => Box::new(Ean::ean8(code, &options.clone().guardbar(true))?),
            Symbology::Ean14 => Box::new(Ean::ean14(code, options)?),
            Symbology::Jan => Box::new(Ean::jan(code, options)?),
            Symbology::Upca => Box::new(UpcA::new(code, options)?),
            Symbology::Isbn13 => Box::new(Isbn13::new(code, options)?),
            Symbology::Isbn10 => Box::new(Isbn10::new(code, options)?),
            Symbology::Issn => Box::new(Issn::new(code, options)?),
        };
        Ok(barcode)
    }
}

/// Construct a symbol by name.
pub fn by_name(name: &str, code: &str, options: &SymbolOptions) -> Result<Box<dyn Barcode>> {
    Symbology::from_name(name)?.build(code, options)
}

/// A symbol request as received over JSON.
///
/// Options sit next to `symbology` and `code` at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRequest {
    pub symbology: Symbology,
    pub code: String,
    #[serde(flatten)]
    pub options: SymbolOptions,
}

impl BarcodeRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> Result<Box<dyn Barcode>> {
        self.symbology.build(&self.code, &self.options)
    }
}
