//! Error types returned by segment factories and encode entry points

use std::error::Error;
use std::fmt;

/// Errors surfaced while building segments or encoding a symbol
///
/// All failures are synchronous and produce no partial output. Internal
/// consistency violations (bit counts, field arithmetic operands) are
/// assertions, not variants of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// The payload needs more bits than the largest allowed version offers
    /// at the requested error correction level
    DataTooLong {
        /// Bits required by the assembled segments
        data_bits: usize,
        /// Bit capacity of the largest allowed version
        capacity_bits: usize,
    },
    /// A segment's character count does not fit its count field at any
    /// allowed version
    SegmentTooLong,
    /// A character outside the mode's alphabet was passed to a strict-mode
    /// constructor
    BadCharset {
        /// The offending character
        character: char,
    },
    /// ECI assignment value outside 0..1_000_000
    BadEci(u32),
    /// The auto-segment constructor was called with empty text
    EmptyText,
    /// Version number outside 1-40
    InvalidVersion(u8),
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            QrError::DataTooLong {
                data_bits,
                capacity_bits,
            } => write!(
                f,
                "Data length = {} bits, max capacity = {} bits",
                data_bits, capacity_bits
            ),
            QrError::SegmentTooLong => write!(f, "Segment too long for its count field"),
            QrError::BadCharset { character } => {
                write!(f, "Character {:?} not encodable in this mode", character)
            }
            QrError::BadEci(value) => write!(f, "ECI assignment value {} out of range", value),
            QrError::EmptyText => write!(f, "Cannot auto-select a mode for empty text"),
            QrError::InvalidVersion(number) => {
                write!(f, "Version {} outside the range 1-40", number)
            }
        }
    }
}

impl Error for QrError {}
