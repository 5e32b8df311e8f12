//! Shared helpers for benchmarks and integration tests
//!
//! Payload generators are deterministic so benchmark numbers and
//! regression tests are reproducible across runs. Environment variables
//! control how much of the benchmark corpus is exercised.

use crate::models::QRCode;
use std::env;

/// Deterministic digit payload of the given length
pub fn numeric_payload(len: usize) -> String {
    (0..len).map(|i| char::from(b'0' + (i % 10) as u8)).collect()
}

/// Deterministic alphanumeric payload of the given length
pub fn alphanumeric_payload(len: usize) -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";
    (0..len)
        .map(|i| char::from(CHARSET[i % CHARSET.len()]))
        .collect()
}

/// Deterministic byte payload of the given length
pub fn byte_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 256) as u8).collect()
}

/// Bench corpus limit from the environment
///
/// Returns `None` (full corpus) when `QRGEN_BENCH_LIMIT` is unset or `0`.
pub fn bench_limit_from_env() -> Option<usize> {
    match env::var("QRGEN_BENCH_LIMIT") {
        Ok(value) => value
            .parse::<usize>()
            .ok()
            .and_then(|v| if v == 0 { None } else { Some(v) }),
        Err(_) => None,
    }
}

/// Smoke test flag from the environment
pub fn smoke_from_env() -> bool {
    matches!(
        env::var("QRGEN_SMOKE").as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE") | Ok("yes") | Ok("YES")
    )
}

/// Summary statistics for a symbol's module matrix
#[derive(Debug, Clone, Copy)]
pub struct ModuleStats {
    /// Count of dark modules
    pub dark_modules: usize,
    /// Total modules in the symbol
    pub total_modules: usize,
    /// Ratio of dark modules to total
    pub dark_ratio: f64,
}

/// Compute dark module stats for a symbol
pub fn module_stats(qr: &QRCode) -> ModuleStats {
    let size = qr.size();
    let mut dark = 0usize;
    for y in 0..size {
        for x in 0..size {
            if qr.get(x, y) {
                dark += 1;
            }
        }
    }
    let total = size * size;
    let ratio = if total == 0 {
        0.0
    } else {
        dark as f64 / total as f64
    };
    ModuleStats {
        dark_modules: dark,
        total_modules: total,
        dark_ratio: ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_generators() {
        assert_eq!(numeric_payload(12), "012345678901");
        assert_eq!(alphanumeric_payload(11), "0123456789A");
        assert_eq!(byte_payload(3), vec![0, 31, 62]);
        assert!(numeric_payload(0).is_empty());
    }
}
