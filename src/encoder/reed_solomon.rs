//! Reed-Solomon error correction codeword generation
//!
//! QR codes use RS over GF(256) with primitive polynomial
//! x^8 + x^4 + x^3 + x^2 + 1 (0x11D) and generator element 2. Data
//! codewords are split into blocks, each block gets its own remainder, and
//! the blocks are interleaved column-major into the final sequence.

use crate::encoder::tables::{ec_block_info, num_raw_data_modules};
use crate::models::{ECLevel, Version};

/// GF(256) field operations using log/exp tables
pub struct Gf256;

static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];

static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1,
];

impl Gf256 {
    /// Product of two field elements
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }
}

/// Reed-Solomon ECC generator for QR data codewords
pub struct ReedSolomonEncoder;

impl ReedSolomonEncoder {
    /// Divisor polynomial of the given degree
    ///
    /// Coefficients are stored highest to lowest, excluding the leading 1
    /// term. Built as the product of (x - r^i) for i in 0..degree with
    /// r = 2.
    pub fn compute_divisor(degree: usize) -> Vec<u8> {
        assert!((1..=255).contains(&degree), "degree out of range");
        let mut coefficients = vec![0u8; degree - 1];
        coefficients.push(1);
        let mut root: u8 = 1;
        for _ in 0..degree {
            // Multiply the current product by (x - root)
            for j in 0..degree {
                coefficients[j] = Gf256::mul(coefficients[j], root);
                if j + 1 < coefficients.len() {
                    coefficients[j] ^= coefficients[j + 1];
                }
            }
            root = Gf256::mul(root, 0x02);
        }
        coefficients
    }

    /// Polynomial remainder of `data` times x^degree divided by `divisor`
    pub fn compute_remainder(data: &[u8], divisor: &[u8]) -> Vec<u8> {
        let mut remainder = vec![0u8; divisor.len()];
        for &b in data {
            let factor = b ^ remainder.remove(0);
            remainder.push(0);
            for (rem, &coeff) in remainder.iter_mut().zip(divisor) {
                *rem ^= Gf256::mul(coeff, factor);
            }
        }
        remainder
    }

    /// Split data codewords into blocks, append per-block ECC, and
    /// interleave into the final transmission sequence
    ///
    /// Short blocks carry one data codeword fewer than long blocks; their
    /// missing slot is skipped when reading column-major.
    pub fn add_ecc_and_interleave(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<u8> {
        let info = ec_block_info(version, ec_level);
        let num_blocks = info.num_blocks;
        let ecc_len = info.ecc_per_block;
        let raw_codewords = num_raw_data_modules(version) / 8;
        debug_assert_eq!(data.len(), raw_codewords - ecc_len * num_blocks);

        let num_short_blocks = num_blocks - raw_codewords % num_blocks;
        let short_block_len = raw_codewords / num_blocks;

        let divisor = Self::compute_divisor(ecc_len);
        let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
        let mut k: usize = 0;
        for i in 0..num_blocks {
            let data_len = short_block_len - ecc_len + usize::from(i >= num_short_blocks);
            let mut block = data[k..k + data_len].to_vec();
            k += data_len;
            let ecc = Self::compute_remainder(&block, &divisor);
            if i < num_short_blocks {
                block.push(0); // virtual padding slot, skipped below
            }
            block.extend_from_slice(&ecc);
            blocks.push(block);
        }

        let mut result = Vec::with_capacity(raw_codewords);
        for i in 0..=short_block_len {
            for (j, block) in blocks.iter().enumerate() {
                if i != short_block_len - ecc_len || j >= num_short_blocks {
                    result.push(block[i]);
                }
            }
        }
        debug_assert_eq!(result.len(), raw_codewords);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf256_identities() {
        for x in 0..=255u8 {
            assert_eq!(Gf256::mul(x, 0), 0);
            assert_eq!(Gf256::mul(0, x), 0);
            assert_eq!(Gf256::mul(x, 1), x);
            assert_eq!(Gf256::mul(1, x), x);
        }
        // 2 * 128 wraps through the primitive polynomial: 0x100 ^ 0x11D
        assert_eq!(Gf256::mul(2, 128), 0x1D);
    }

    #[test]
    fn test_gf256_commutative_associative() {
        let samples = [1u8, 2, 3, 29, 111, 200, 255];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(Gf256::mul(a, b), Gf256::mul(b, a));
                for &c in &samples {
                    assert_eq!(
                        Gf256::mul(Gf256::mul(a, b), c),
                        Gf256::mul(a, Gf256::mul(b, c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_gf256_inverses_exist() {
        for x in 1..=255u8 {
            let found = (1..=255u8).any(|y| Gf256::mul(x, y) == 1);
            assert!(found, "no inverse for {}", x);
        }
    }

    #[test]
    fn test_divisor_small_degrees() {
        // (x - 1) -> [1]
        assert_eq!(ReedSolomonEncoder::compute_divisor(1), vec![1]);
        // (x - 1)(x - 2) = x^2 + 3x + 2
        assert_eq!(ReedSolomonEncoder::compute_divisor(2), vec![3, 2]);
    }

    #[test]
    fn test_remainder_divisibility() {
        // Appending the remainder makes the message divisible by the
        // divisor, so a second division leaves zero.
        let divisor = ReedSolomonEncoder::compute_divisor(10);
        let data: Vec<u8> = (0..16).map(|i| (i * 37 + 5) as u8).collect();
        let remainder = ReedSolomonEncoder::compute_remainder(&data, &divisor);
        assert_eq!(remainder.len(), 10);

        let mut codeword = data.clone();
        codeword.extend_from_slice(&remainder);
        let check = ReedSolomonEncoder::compute_remainder(&codeword, &divisor);
        assert!(check.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_interleave_layout() {
        // Version 5-H: 4 blocks of 22 ECC codewords, 134 raw codewords,
        // 46 data codewords split 11+11+12+12.
        let version = Version::new(5).unwrap();
        let data: Vec<u8> = (0..46).collect();
        let result = ReedSolomonEncoder::add_ecc_and_interleave(&data, version, ECLevel::H);
        assert_eq!(result.len(), 134);

        // Column-major over the four blocks
        assert_eq!(&result[0..4], &[0, 11, 22, 34]);
        assert_eq!(&result[4..8], &[1, 12, 23, 35]);
        // The 12th data column only exists in the two long blocks
        assert_eq!(&result[44..46], &[33, 45]);
    }

    #[test]
    fn test_interleave_single_block() {
        // Version 1-M is a single block of 16 data + 10 ECC codewords.
        let version = Version::new(1).unwrap();
        let data: Vec<u8> = (0..16).collect();
        let result = ReedSolomonEncoder::add_ecc_and_interleave(&data, version, ECLevel::M);
        assert_eq!(result.len(), 26);
        assert_eq!(&result[..16], &data[..]);
    }
}
