//! Module grid construction
//!
//! Draws the function patterns, lays the codeword stream onto the grid in
//! the zigzag order, evaluates the eight masks in place, and stamps the
//! format and version information. The builder owns both the module grid
//! and the parallel function-module grid; only the module grid survives
//! into the finished symbol.

use crate::encoder::penalty::penalty_score;
use crate::encoder::tables::num_raw_data_modules;
use crate::models::{BitMatrix, ECLevel, MaskPattern, QRCode, Version};

/// Builder for the module grid of one symbol
pub struct MatrixBuilder {
    version: Version,
    ec_level: ECLevel,
    size: usize,
    modules: BitMatrix,
    is_function: BitMatrix,
}

impl MatrixBuilder {
    /// Create a builder with all function patterns drawn and the format
    /// cells stamped with a placeholder mask
    pub fn new(version: Version, ec_level: ECLevel) -> Self {
        let size = version.size();
        let mut builder = Self {
            version,
            ec_level,
            size,
            modules: BitMatrix::new(size),
            is_function: BitMatrix::new(size),
        };
        builder.draw_function_patterns();
        builder
    }

    fn draw_function_patterns(&mut self) {
        let size = self.size;

        // Timing patterns, dark at even indices
        for i in 0..size {
            self.set_function_module(6, i, i % 2 == 0);
            self.set_function_module(i, 6, i % 2 == 0);
        }

        // Finder patterns with separators; cells past the edge are dropped
        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        // Alignment patterns everywhere except the three finder corners
        let positions = alignment_pattern_positions(self.version);
        let count = positions.len();
        for i in 0..count {
            for j in 0..count {
                let at_finder = (i == 0 && j == 0)
                    || (i == 0 && j == count - 1)
                    || (i == count - 1 && j == 0);
                if !at_finder {
                    self.draw_alignment_pattern(positions[i], positions[j]);
                }
            }
        }

        // Placeholder mask so the format cells are marked as function
        // modules; overwritten once the real mask is chosen.
        self.draw_format_bits(MaskPattern::Pattern0);
        self.draw_version_bits();
    }

    /// 9x9 finder stamp (including the light separator ring) centered at
    /// (x, y); dark iff the Chebyshev distance is neither 2 nor 4
    fn draw_finder_pattern(&mut self, x: usize, y: usize) {
        let size = self.size as i32;
        for dy in -4i32..=4 {
            for dx in -4i32..=4 {
                let xx = x as i32 + dx;
                let yy = y as i32 + dy;
                if (0..size).contains(&xx) && (0..size).contains(&yy) {
                    let dist = dx.abs().max(dy.abs());
                    self.set_function_module(xx as usize, yy as usize, dist != 2 && dist != 4);
                }
            }
        }
    }

    /// 5x5 alignment stamp centered at (x, y); dark iff the Chebyshev
    /// distance is not 1
    fn draw_alignment_pattern(&mut self, x: usize, y: usize) {
        for dy in -2i32..=2 {
            for dx in -2i32..=2 {
                let xx = (x as i32 + dx) as usize;
                let yy = (y as i32 + dy) as usize;
                self.set_function_module(xx, yy, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    /// Write a module and mark the cell as a function module
    fn set_function_module(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.is_function.set(x, y, true);
    }

    /// Stamp both copies of the 15-bit format information for a mask
    ///
    /// BCH(15,5) remainder over generator 0x537, XOR-masked with 0x5412.
    fn draw_format_bits(&mut self, mask: MaskPattern) {
        let data = (self.ec_level.format_bits() << 3) | mask.value();
        let mut rem = data;
        for _ in 0..10 {
            rem = (rem << 1) ^ ((rem >> 9) * 0x537);
        }
        let bits = ((data << 10) | rem) ^ 0x5412;
        debug_assert_eq!(bits >> 15, 0);

        // First copy around the top-left finder
        for i in 0..6 {
            self.set_function_module(8, i, get_bit(bits, i));
        }
        self.set_function_module(8, 7, get_bit(bits, 6));
        self.set_function_module(8, 8, get_bit(bits, 7));
        self.set_function_module(7, 8, get_bit(bits, 8));
        for i in 9..15 {
            self.set_function_module(14 - i, 8, get_bit(bits, i));
        }

        // Second copy split between the other two finders
        let size = self.size;
        for i in 0..8 {
            self.set_function_module(size - 1 - i, 8, get_bit(bits, i));
        }
        for i in 8..15 {
            self.set_function_module(8, size - 15 + i, get_bit(bits, i));
        }
        self.set_function_module(8, size - 8, true); // always dark
    }

    /// Stamp both copies of the 18-bit version information (versions 7+)
    ///
    /// BCH(18,6) remainder over generator 0x1F25.
    fn draw_version_bits(&mut self) {
        if self.version.number() < 7 {
            return;
        }
        let data = u32::from(self.version.number());
        let mut rem = data;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
        }
        let bits = (data << 12) | rem;
        debug_assert_eq!(bits >> 18, 0);

        // Two 6x3 blocks next to the top-right and bottom-left finders
        for i in 0..18 {
            let bit = get_bit(bits, i);
            let a = self.size - 11 + i % 3;
            let b = i / 3;
            self.set_function_module(a, b, bit);
            self.set_function_module(b, a, bit);
        }
    }

    /// Lay the codeword stream onto the non-function cells in the zigzag
    /// scan order
    pub fn draw_codewords(&mut self, data: &[u8]) {
        debug_assert_eq!(data.len(), num_raw_data_modules(self.version) / 8);
        let size = self.size as i32;
        let mut i: usize = 0; // bit index into the codeword stream

        // Column pairs from right to left; the pair that would straddle
        // the timing column shifts left by one.
        let mut right = size - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            for vert in 0..size {
                for j in 0..2 {
                    let x = right - j;
                    let upward = (right + 1) & 2 == 0;
                    let y = if upward { size - 1 - vert } else { vert };
                    if !self.is_function.get(x as usize, y as usize) && i < data.len() * 8 {
                        let dark = (data[i >> 3] >> (7 - (i & 7))) & 1 != 0;
                        self.modules.set(x as usize, y as usize, dark);
                        i += 1;
                    }
                    // Any remainder bits stay light.
                }
            }
            right -= 2;
        }
        debug_assert_eq!(i, data.len() * 8);
    }

    /// XOR the mask over every non-function cell; self-inverse
    pub fn apply_mask(&mut self, mask: MaskPattern) {
        for y in 0..self.size {
            for x in 0..self.size {
                if mask.is_masked(y, x) && !self.is_function.get(x, y) {
                    self.modules.toggle(x, y);
                }
            }
        }
    }

    /// Score all eight masks in place and return the lowest-penalty one,
    /// ties broken by ascending index
    fn select_mask(&mut self) -> MaskPattern {
        let mut best = MaskPattern::Pattern0;
        let mut min_penalty = i32::MAX;
        for candidate in MaskPattern::ALL {
            self.apply_mask(candidate);
            self.draw_format_bits(candidate);
            let penalty = penalty_score(&self.modules);
            if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                eprintln!("mask {}: penalty {}", candidate.value(), penalty);
            }
            if penalty < min_penalty {
                best = candidate;
                min_penalty = penalty;
            }
            self.apply_mask(candidate); // Undoes the mask due to XOR
        }
        best
    }

    /// Apply the chosen (or forced) mask, stamp the final format bits, and
    /// move the module grid into the finished symbol
    pub fn finish(mut self, mask: Option<MaskPattern>) -> QRCode {
        let mask = match mask {
            Some(m) => m,
            None => self.select_mask(),
        };
        self.apply_mask(mask);
        self.draw_format_bits(mask);
        QRCode::new(self.version, self.ec_level, mask, self.modules)
    }
}

/// Alignment pattern center coordinates for a version, ascending
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let ver = usize::from(version.number());
    if ver == 1 {
        return Vec::new();
    }
    let num_align = ver / 7 + 2;
    let size = version.size();
    let step = (ver * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;
    let mut result: Vec<usize> = (0..num_align - 1).map(|i| size - 7 - i * step).collect();
    result.push(6);
    result.reverse();
    result
}

fn get_bit(x: u32, i: usize) -> bool {
    (x >> i) & 1 != 0
}
