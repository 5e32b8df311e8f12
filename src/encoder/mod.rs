//! QR code encoding modules
//!
//! This module contains the full pipeline from data segments to a finished
//! symbol:
//! - Bit stream assembly (BitBuffer, data mode encoders, segments)
//! - Capacity tables and version selection
//! - Reed-Solomon error correction and block interleaving
//! - Module layout, mask evaluation, and format/version stamping

/// Bit-width-checked append-only bit sequence
pub mod bitbuffer;
/// Module grid construction (function patterns, zigzag, masking)
pub mod matrix_builder;
/// Data mode encoders (numeric, alphanumeric, byte, ECI)
pub mod modes;
/// The four mask penalty rules
pub mod penalty;
/// Main encoder that orchestrates the pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction codeword generation
pub mod reed_solomon;
/// Data segments and their factories
pub mod segment;
/// Capacity tables from the QR specification
pub mod tables;
