use crate::encoder::bitbuffer::BitBuffer;

/// Byte mode encoder (mode 0100)
pub struct ByteEncoder;

impl ByteEncoder {
    /// Append each byte as 8 bits, most significant first
    pub fn encode(data: &[u8]) -> Vec<bool> {
        let mut bits = BitBuffer::with_capacity(data.len() * 8);
        for &b in data {
            bits.append_bits(u32::from(b), 8);
        }
        bits.into_bits()
    }
}
