//! Data segments and their factories
//!
//! A segment is an immutable (mode, character count, bit payload) triple.
//! The factories delegate the bit packing to the mode encoders and the
//! auto-selecting constructor picks the densest single mode for a text.

use crate::encoder::modes::alphanumeric::AlphanumericEncoder;
use crate::encoder::modes::byte::ByteEncoder;
use crate::encoder::modes::eci::EciEncoder;
use crate::encoder::modes::numeric::NumericEncoder;
use crate::error::QrError;
use crate::models::Version;

/// Data encoding mode of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digits 0-9
    Numeric,
    /// The 45-character alphanumeric charset
    Alphanumeric,
    /// Arbitrary 8-bit data
    Byte,
    /// Extended Channel Interpretation designator
    Eci,
}

impl Mode {
    /// Four-bit mode indicator written before each segment
    pub(crate) fn mode_bits(self) -> u32 {
        match self {
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::Byte => 0x4,
            Mode::Eci => 0x7,
        }
    }

    /// Width of the character count field at the given version
    pub(crate) fn char_count_bits(self, version: Version) -> u8 {
        let group = usize::from((version.number() + 7) / 17);
        (match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Eci => [0, 0, 0],
        })[group]
    }
}

/// An immutable (mode, character count, bit payload) triple
///
/// `num_chars` is the character count for text modes, the byte count for
/// byte mode, and zero for ECI designators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    num_chars: usize,
    data: Vec<bool>,
}

impl Segment {
    /// Assemble a segment from raw parts
    pub fn new(mode: Mode, num_chars: usize, data: Vec<bool>) -> Self {
        Self {
            mode,
            num_chars,
            data,
        }
    }

    /// Digits-only segment; empty input yields a zero-bit segment
    pub fn make_numeric(text: &str) -> Result<Self, QrError> {
        Ok(Self::new(
            Mode::Numeric,
            text.len(),
            NumericEncoder::encode(text)?,
        ))
    }

    /// Alphanumeric segment; empty input yields a zero-bit segment
    pub fn make_alphanumeric(text: &str) -> Result<Self, QrError> {
        Ok(Self::new(
            Mode::Alphanumeric,
            text.len(),
            AlphanumericEncoder::encode(text)?,
        ))
    }

    /// Byte segment; the count is the byte length
    pub fn make_bytes(data: &[u8]) -> Self {
        Self::new(Mode::Byte, data.len(), ByteEncoder::encode(data))
    }

    /// ECI designator segment with a zero character count
    pub fn make_eci(assign_value: u32) -> Result<Self, QrError> {
        Ok(Self::new(Mode::Eci, 0, EciEncoder::encode(assign_value)?))
    }

    /// Auto-selecting constructor over arbitrary text
    ///
    /// All digits encode numeric, all-alphanumeric text encodes
    /// alphanumeric, anything else becomes UTF-8 bytes. Always emits a
    /// single segment; empty text is rejected.
    pub fn make_segment(text: &str) -> Result<Self, QrError> {
        if text.is_empty() {
            Err(QrError::EmptyText)
        } else if NumericEncoder::is_numeric(text) {
            Self::make_numeric(text)
        } else if AlphanumericEncoder::is_alphanumeric(text) {
            Self::make_alphanumeric(text)
        } else {
            Ok(Self::make_bytes(text.as_bytes()))
        }
    }

    /// The segment's data mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Character count (byte count for byte mode, zero for ECI)
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// The packed bit payload
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Total header plus payload bits for the segments at a version, or
    /// None when some character count does not fit its count field
    pub(crate) fn total_bits(segments: &[Segment], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segments {
            let cc_bits = seg.mode.char_count_bits(version);
            if seg.num_chars >= 1usize << cc_bits {
                return None;
            }
            result = result.checked_add(4 + usize::from(cc_bits))?;
            result = result.checked_add(seg.data.len())?;
        }
        Some(result)
    }
}
