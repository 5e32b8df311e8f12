use crate::encoder::bitbuffer::BitBuffer;
use crate::error::QrError;

/// The 45-character alphanumeric charset; a character's index is its
/// encoded value
pub const ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Alphanumeric mode encoder (mode 0010)
///
/// Pairs encode as 45*a + b in 11 bits; a trailing single character takes
/// 6 bits.
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Pack text into the alphanumeric-mode bit payload
    pub fn encode(text: &str) -> Result<Vec<bool>, QrError> {
        let mut bits = BitBuffer::with_capacity(text.len() * 11 / 2 + 6);
        let mut accum: u32 = 0;
        let mut count: u8 = 0;
        for c in text.chars() {
            // The charset is ASCII, so the byte index is the character index.
            let index = ALPHANUMERIC_CHARSET
                .find(c)
                .ok_or(QrError::BadCharset { character: c })?;
            accum = accum * 45 + index as u32;
            count += 1;
            if count == 2 {
                bits.append_bits(accum, 11);
                accum = 0;
                count = 0;
            }
        }
        if count > 0 {
            // 1 character remaining
            bits.append_bits(accum, 6);
        }
        Ok(bits.into_bits())
    }

    /// Whether every character is in the alphanumeric charset
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }
}
