//! # Error Types
//!
//! This module defines error types used throughout the eancode library.
//!
//! Every error is raised synchronously while a symbol is constructed; once a
//! symbol exists, building its pattern cannot fail.

use thiserror::Error;

/// Main error type for eancode operations
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// Non-digit in the primary code
    #[error("{symbology} code can only contain numbers, got {code:?}")]
    InvalidCharacter {
        symbology: &'static str,
        code: String,
    },

    /// Primary code has the wrong number of digits for its symbology
    #[error("{symbology} must have {expected} digits, received {found}")]
    WrongLength {
        symbology: &'static str,
        expected: usize,
        found: usize,
    },

    /// Non-digit in the addon
    #[error("Addon can only contain numbers, got {0:?}")]
    InvalidAddonCharacter(String),

    /// Addon is neither 2 nor 5 digits
    #[error("Addon must be 2 or 5 digits, received {0}")]
    InvalidAddonLength(usize),

    /// JAN country code outside 450-459 / 490-499
    #[error("Country code isn't between 450-459 or 490-499: {0}")]
    WrongCountryCode(String),

    /// ISBN-13 not starting with 978 or 979
    #[error("ISBN must start with 978 or 979: {0}")]
    WrongPrefix(String),

    /// Code set lookup outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),

    /// Checksum input has the wrong number of digits
    #[error("Checksum input must have {expected} digits, received {found}")]
    InvalidLength { expected: usize, found: usize },

    /// Registry lookup miss
    #[error("Unknown symbology: {0}")]
    UnknownSymbology(String),

    /// Malformed JSON request
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BarcodeError>;
