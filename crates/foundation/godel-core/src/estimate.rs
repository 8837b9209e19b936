//! Size estimate for a statement of a given length, assuming every position
//! carries the same average code.
//!
//! Works in `log10` space, so the cost is one logarithm per prime no matter
//! how large the number would be.

use crate::primes::first_n_primes;
use serde::Serialize;

/// Average code used when the caller has no better guess
pub const DEFAULT_AVERAGE_CODE: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeEstimate {
    pub statement_length: usize,
    pub average_code: u32,
    pub primes_used: Vec<u64>,
    pub log10: f64,
    pub digits: usize,
    /// e.g. `1.77e+07`
    pub scientific_notation: String,
}

/// `log10(Π p^avg) = avg · Σ log10(p)`
pub fn estimate_size(statement_length: usize, average_code: u32) -> SizeEstimate {
    let primes_used = first_n_primes(statement_length);
    let log10 = f64::from(average_code) * primes_used.iter().map(|&p| (p as f64).log10()).sum::<f64>();

    SizeEstimate {
        statement_length,
        average_code,
        primes_used,
        log10,
        digits: log10.floor() as usize + 1,
        scientific_notation: scientific_notation(log10),
    }
}

/// Two-decimal mantissa with a signed, zero-padded exponent, from `log10(n)`
pub fn scientific_notation(log10: f64) -> String {
    let mut exponent = log10.floor();
    let mut mantissa = (10f64.powf(log10 - exponent) * 100.0).round() as u32;
    if mantissa >= 1000 {
        mantissa /= 10;
        exponent += 1.0;
    }

    format!("{}.{:02}e+{:02}", mantissa / 100, mantissa % 100, exponent as u64)
}
