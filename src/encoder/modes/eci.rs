use crate::encoder::bitbuffer::BitBuffer;
use crate::error::QrError;

/// ECI designator encoder (mode 0111)
///
/// The assignment value is written in one of three self-delimiting forms:
/// 8 bits below 2^7, 16 bits below 2^14, 24 bits below 1_000_000.
pub struct EciEncoder;

impl EciEncoder {
    /// Pack an ECI assignment value into its bit payload
    pub fn encode(assign_value: u32) -> Result<Vec<bool>, QrError> {
        let mut bits = BitBuffer::with_capacity(24);
        if assign_value < (1 << 7) {
            bits.append_bits(assign_value, 8);
        } else if assign_value < (1 << 14) {
            bits.append_bits(0b10, 2);
            bits.append_bits(assign_value, 14);
        } else if assign_value < 1_000_000 {
            bits.append_bits(0b110, 3);
            bits.append_bits(assign_value, 21);
        } else {
            return Err(QrError::BadEci(assign_value));
        }
        Ok(bits.into_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eci_lengths() {
        assert_eq!(EciEncoder::encode(0).unwrap().len(), 8);
        assert_eq!(EciEncoder::encode(127).unwrap().len(), 8);
        assert_eq!(EciEncoder::encode(128).unwrap().len(), 16);
        assert_eq!(EciEncoder::encode(16383).unwrap().len(), 16);
        assert_eq!(EciEncoder::encode(16384).unwrap().len(), 24);
        assert_eq!(EciEncoder::encode(999_999).unwrap().len(), 24);
    }

    #[test]
    fn test_eci_out_of_range() {
        assert_eq!(
            EciEncoder::encode(1_000_000),
            Err(QrError::BadEci(1_000_000))
        );
    }

    #[test]
    fn test_eci_prefix() {
        // 26 (UTF-8) fits the single-byte form: 00011010
        let bits = EciEncoder::encode(26).unwrap();
        let value = bits.iter().fold(0u32, |acc, &b| (acc << 1) | u32::from(b));
        assert_eq!(value, 26);

        // Two-byte form carries the 10 prefix.
        let bits = EciEncoder::encode(128).unwrap();
        assert!(bits[0]);
        assert!(!bits[1]);
    }
}
