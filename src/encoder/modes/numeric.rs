use crate::encoder::bitbuffer::BitBuffer;
use crate::error::QrError;

/// Numeric mode encoder (mode 0001)
///
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits.
pub struct NumericEncoder;

impl NumericEncoder {
    /// Pack a digit string into the numeric-mode bit payload
    pub fn encode(text: &str) -> Result<Vec<bool>, QrError> {
        let mut bits = BitBuffer::with_capacity(text.len() * 10 / 3 + 4);
        let mut accum: u32 = 0;
        let mut count: u8 = 0;
        for c in text.chars() {
            let digit = c
                .to_digit(10)
                .ok_or(QrError::BadCharset { character: c })?;
            accum = accum * 10 + digit;
            count += 1;
            if count == 3 {
                bits.append_bits(accum, 10);
                accum = 0;
                count = 0;
            }
        }
        if count > 0 {
            // 1 or 2 digits remaining
            bits.append_bits(accum, count * 3 + 1);
        }
        Ok(bits.into_bits())
    }

    /// Whether every character is an ASCII digit
    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }
}
