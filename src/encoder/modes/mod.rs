//! QR code data mode encoders
//!
//! This module contains the bit packers for the supported data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Digits, uppercase letters, and nine symbols
//! - Byte: 8-bit data (UTF-8, binary, etc.)
//! - Eci: Extended Channel Interpretation designators

pub mod alphanumeric;
pub mod byte;
pub mod eci;
pub mod numeric;
