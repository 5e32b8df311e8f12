//! Segment-to-symbol encoding pipeline
//!
//! Chooses the smallest version that fits the payload, boosts the error
//! correction level when spare capacity allows, assembles the bit stream
//! with terminator and pad bytes, packs it into data codewords, and hands
//! the interleaved codeword sequence to the matrix builder.

use crate::encoder::bitbuffer::BitBuffer;
use crate::encoder::matrix_builder::MatrixBuilder;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::segment::Segment;
use crate::encoder::tables::num_data_codewords;
use crate::error::QrError;
use crate::models::{ECLevel, MaskPattern, QRCode, Version};

/// Pad codewords alternate between these two byte values
const PAD_BYTES: [u32; 2] = [0xEC, 0x11];

/// Orchestrates the encoding pipeline from segments to a finished symbol
pub struct QrEncoder;

impl QrEncoder {
    /// Encode segments at the requested level, searching all versions,
    /// boosting the level and choosing the mask automatically
    pub fn encode_segments(segments: &[Segment], ec_level: ECLevel) -> Result<QRCode, QrError> {
        Self::encode_segments_advanced(segments, ec_level, Version::MIN, Version::MAX, None, true)
    }

    /// Encode segments with full control over the version range, the mask
    /// choice, and level boosting
    pub fn encode_segments_advanced(
        segments: &[Segment],
        ec_level: ECLevel,
        min_version: Version,
        max_version: Version,
        mask: Option<MaskPattern>,
        boost_ecl: bool,
    ) -> Result<QRCode, QrError> {
        let (version, ec_level, data_codewords) =
            Self::encode_to_codewords(segments, ec_level, min_version, max_version, boost_ecl)?;
        let all_codewords =
            ReedSolomonEncoder::add_ecc_and_interleave(&data_codewords, version, ec_level);
        let mut builder = MatrixBuilder::new(version, ec_level);
        builder.draw_codewords(&all_codewords);
        Ok(builder.finish(mask))
    }

    /// Run version selection, level boosting, and bit-stream assembly, and
    /// return the packed data codewords before error correction
    pub fn encode_to_codewords(
        segments: &[Segment],
        ec_level: ECLevel,
        min_version: Version,
        max_version: Version,
        boost_ecl: bool,
    ) -> Result<(Version, ECLevel, Vec<u8>), QrError> {
        assert!(min_version <= max_version, "invalid version range");

        // Smallest version in the range that fits the payload
        let mut version = min_version;
        let data_used_bits = loop {
            let capacity_bits = num_data_codewords(version, ec_level) * 8;
            match Segment::total_bits(segments, version) {
                Some(n) if n <= capacity_bits => break n,
                used => {
                    if version >= max_version {
                        return Err(match used {
                            None => QrError::SegmentTooLong,
                            Some(n) => QrError::DataTooLong {
                                data_bits: n,
                                capacity_bits,
                            },
                        });
                    }
                    version = Version::new(version.number() + 1)?;
                }
            }
        };

        // Use the highest level whose capacity still holds the payload at
        // the chosen version. The version never changes here.
        let mut ec_level = ec_level;
        if boost_ecl {
            for &level in &[ECLevel::M, ECLevel::Q, ECLevel::H] {
                if data_used_bits <= num_data_codewords(version, level) * 8 {
                    ec_level = level;
                }
            }
        }

        // Concatenate segment headers and payloads
        let mut bits = BitBuffer::with_capacity(data_used_bits);
        for seg in segments {
            bits.append_bits(seg.mode().mode_bits(), 4);
            bits.append_bits(seg.num_chars() as u32, seg.mode().char_count_bits(version));
            bits.extend_from_slice(seg.data());
        }
        debug_assert_eq!(bits.len(), data_used_bits);

        // Terminator, shortened when little capacity remains, then zero
        // padding to the next byte boundary
        let capacity_bits = num_data_codewords(version, ec_level) * 8;
        debug_assert!(bits.len() <= capacity_bits);
        let terminator = (capacity_bits - bits.len()).min(4);
        bits.append_bits(0, terminator as u8);
        let to_boundary = bits.len().wrapping_neg() & 7;
        bits.append_bits(0, to_boundary as u8);
        debug_assert_eq!(bits.len() % 8, 0);

        // Alternating pad bytes until the capacity is reached
        for &pad in PAD_BYTES.iter().cycle() {
            if bits.len() >= capacity_bits {
                break;
            }
            bits.append_bits(pad, 8);
        }

        let codewords = bits.to_bytes();
        debug_assert_eq!(codewords.len(), num_data_codewords(version, ec_level));
        Ok((version, ec_level, codewords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_numeric_codewords() {
        // The standard's worked example: "01234567" at version 1-M.
        let seg = Segment::make_numeric("01234567").unwrap();
        let (version, ec_level, codewords) =
            QrEncoder::encode_to_codewords(&[seg], ECLevel::M, Version::MIN, Version::MAX, false)
                .unwrap();
        assert_eq!(version.number(), 1);
        assert_eq!(ec_level, ECLevel::M);
        assert_eq!(
            codewords,
            vec![
                0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
                0x11, 0xEC, 0x11
            ]
        );
    }

    #[test]
    fn test_boost_raises_level_without_changing_version() {
        let seg = Segment::make_numeric("01234567").unwrap();
        let (version, ec_level, _) =
            QrEncoder::encode_to_codewords(&[seg], ECLevel::L, Version::MIN, Version::MAX, true)
                .unwrap();
        // 41 data bits fit even the 9 codewords of 1-H.
        assert_eq!(version.number(), 1);
        assert_eq!(ec_level, ECLevel::H);
    }

    #[test]
    fn test_boost_never_lowers_level() {
        // 13 bytes need version 2 at High; boosting from Quartile must not
        // fall back to a weaker level even though weaker levels also fit.
        let seg = Segment::make_bytes(b"Hello, World!");
        let (version, ec_level, _) = QrEncoder::encode_to_codewords(
            std::slice::from_ref(&seg),
            ECLevel::Q,
            Version::MIN,
            Version::MAX,
            true,
        )
        .unwrap();
        assert_eq!(version.number(), 2);
        assert_eq!(ec_level, ECLevel::H);
    }

    #[test]
    fn test_version_is_minimal() {
        // 13 bytes miss the 9-codeword capacity of 1-H but fit 2-H, so the
        // version search must stop at 2 and fail when capped at 1.
        let seg = Segment::make_bytes(b"Hello, World!");
        let (version, _, _) = QrEncoder::encode_to_codewords(
            std::slice::from_ref(&seg),
            ECLevel::H,
            Version::MIN,
            Version::MAX,
            true,
        )
        .unwrap();
        assert_eq!(version.number(), 2);

        let capped = QrEncoder::encode_to_codewords(
            std::slice::from_ref(&seg),
            ECLevel::H,
            Version::MIN,
            Version::new(1).unwrap(),
            true,
        );
        assert!(matches!(capped, Err(QrError::DataTooLong { .. })));
    }

    #[test]
    fn test_empty_segment_list_pads_to_capacity() {
        let (version, ec_level, codewords) =
            QrEncoder::encode_to_codewords(&[], ECLevel::L, Version::MIN, Version::MAX, false)
                .unwrap();
        assert_eq!(version.number(), 1);
        assert_eq!(ec_level, ECLevel::L);
        assert_eq!(codewords.len(), 19);
        // Terminator byte, then the alternating pad
        assert_eq!(codewords[0], 0x00);
        assert_eq!(codewords[1], 0xEC);
        assert_eq!(codewords[2], 0x11);
    }

    #[test]
    fn test_count_field_overflow_reports_segment_too_long() {
        // 300 bytes never fit the 8-bit byte-mode count field of versions
        // 1-9, and the search is capped below version 10.
        let seg = Segment::make_bytes(&[0u8; 300]);
        let result = QrEncoder::encode_to_codewords(
            std::slice::from_ref(&seg),
            ECLevel::L,
            Version::MIN,
            Version::new(9).unwrap(),
            true,
        );
        assert_eq!(result, Err(QrError::SegmentTooLong));
    }
}
