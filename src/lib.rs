//! QRGen - fast QR code generation library
//!
//! A pure Rust QR Code Model 2 (ISO/IEC 18004) encoder with zero runtime
//! dependencies. Supports versions 1 to 40, all four error correction
//! levels, and the numeric, alphanumeric, byte, and ECI data modes.
//!
//! The encoder selects the smallest version that fits the payload, boosts
//! the error correction level when spare capacity allows, and picks the
//! mask with the lowest penalty score. Rendering is left to consumers,
//! which read the finished symbol through [`QRCode::get`].

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// Encoding pipeline (segments, Reed-Solomon, module layout, masking)
pub mod encoder;
/// Error types returned by segment factories and encode entry points
pub mod error;
/// Core data structures (QRCode, BitMatrix, Version, ECLevel, MaskPattern)
pub mod models;
/// Helpers shared by benchmarks and integration tests
pub mod tools;

pub use encoder::segment::{Mode, Segment};
pub use error::QrError;
pub use models::{BitMatrix, ECLevel, MaskPattern, QRCode, Version};

use encoder::qr_encoder::QrEncoder;

/// Encode Unicode text at the given error correction level
///
/// Picks numeric, alphanumeric, or byte mode automatically and the
/// smallest version that fits. The level may be boosted when spare
/// capacity allows.
pub fn encode_text(text: &str, ec_level: ECLevel) -> Result<QRCode, QrError> {
    let seg = Segment::make_segment(text)?;
    QrEncoder::encode_segments(&[seg], ec_level)
}

/// Encode a digit string in numeric mode
pub fn encode_numeric(digits: &str, ec_level: ECLevel) -> Result<QRCode, QrError> {
    let seg = Segment::make_numeric(digits)?;
    QrEncoder::encode_segments(&[seg], ec_level)
}

/// Encode text drawn from the 45-character alphanumeric charset
pub fn encode_alphanumeric(text: &str, ec_level: ECLevel) -> Result<QRCode, QrError> {
    let seg = Segment::make_alphanumeric(text)?;
    QrEncoder::encode_segments(&[seg], ec_level)
}

/// Encode arbitrary binary data in byte mode
pub fn encode_binary(data: &[u8], ec_level: ECLevel) -> Result<QRCode, QrError> {
    let seg = Segment::make_bytes(data);
    QrEncoder::encode_segments(&[seg], ec_level)
}

/// Encode pre-built segments in order; the encoder never reorders them
pub fn encode_segments(ec_level: ECLevel, segments: &[Segment]) -> Result<QRCode, QrError> {
    QrEncoder::encode_segments(segments, ec_level)
}

/// Encoder with configuration options
///
/// Holds the requested error correction level, the allowed version range,
/// an optional fixed mask, and the level boosting switch.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    ec_level: ECLevel,
    min_version: Version,
    max_version: Version,
    mask: Option<MaskPattern>,
    boost_ecl: bool,
}

impl Encoder {
    /// Create an encoder with default settings at the given level
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
            boost_ecl: true,
        }
    }

    /// Restrict the version search to an inclusive range
    pub fn version_range(mut self, min: Version, max: Version) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Force a mask instead of penalty-driven selection
    pub fn mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Enable or disable error correction level boosting
    pub fn boost_ecl(mut self, boost: bool) -> Self {
        self.boost_ecl = boost;
        self
    }

    /// Encode text with automatic mode selection
    pub fn encode_text(&self, text: &str) -> Result<QRCode, QrError> {
        let seg = Segment::make_segment(text)?;
        self.encode_segments(&[seg])
    }

    /// Encode binary data in byte mode
    pub fn encode_binary(&self, data: &[u8]) -> Result<QRCode, QrError> {
        self.encode_segments(&[Segment::make_bytes(data)])
    }

    /// Encode pre-built segments in order
    pub fn encode_segments(&self, segments: &[Segment]) -> Result<QRCode, QrError> {
        QrEncoder::encode_segments_advanced(
            segments,
            self.ec_level,
            self.min_version,
            self.max_version,
            self.mask,
            self.boost_ecl,
        )
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(ECLevel::M)
    }
}
