//! UPC-A code sets. Bit-identical to EAN sets A and C, which is why a UPC-A
//! symbol scans as an EAN-13 with a leading zero.

use super::ean;

pub const CODE_L: [&str; 10] = ean::CODE_A;

pub const CODE_R: [&str; 10] = ean::CODE_C;
