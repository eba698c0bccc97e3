//! EAN-2 / EAN-5 supplemental symbol data.
//!
//! Addon digits are drawn from EAN code sets A and B only.

use super::Class::{self, A, B};

/// Light gap between the main symbol and the addon (9 modules)
pub const ADDON_QUIET_ZONE: &str = "000000000";

/// Addon start guard (4 modules)
pub const ADDON_START: &str = "1011";

/// Delineator between addon digits (2 modules)
pub const ADDON_SEPARATOR: &str = "01";

/// EAN-2 parity, indexed by the addon value mod 4.
pub const ADDON2_PARITY: [[Class; 2]; 4] = [[A, A], [A, B], [B, A], [B, B]];

/// EAN-5 parity, indexed by the addon checksum.
pub const ADDON5_PARITY: [[Class; 5]; 10] = [
    [B, B, A, A, A],
    [B, A, B, A, A],
    [B, A, A, B, A],
    [B, A, A, A, B],
    [A, B, B, A, A],
    [A, A, B, B, A],
    [A, A, A, B, B],
    [A, B, A, B, A],
    [A, B, A, A, B],
    [A, A, B, A, B],
];
