//! Decoder
//!
//! Gödel number → statement. The number is fully factored; ascending primes
//! give the position order and each exponent is looked up as a symbol code.
//!
//! Factoring is by trial division and is the expensive step. It runs under a
//! [`FactorLimits`] budget so hostile input fails instead of hanging.

use crate::serde_util;
use crate::symbols::SymbolTable;
use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How often (in trial divisors) the clock is checked
const CLOCK_CHECK_INTERVAL: u64 = 4096;

/// Budget for a single factorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorLimits {
    /// Largest trial divisor attempted before giving up
    pub max_trial_divisor: u64,
    /// Wall-clock budget in milliseconds
    pub timeout_ms: u64,
}

impl FactorLimits {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// No ceiling at all
    pub fn unbounded() -> Self {
        Self {
            max_trial_divisor: u64::MAX,
            timeout_ms: u64::MAX,
        }
    }
}

impl Default for FactorLimits {
    fn default() -> Self {
        Self {
            max_trial_divisor: 10_000_000,
            timeout_ms: 5_000,
        }
    }
}

/// One recovered position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedSymbol {
    pub position: usize,
    #[serde(serialize_with = "serde_util::decimal")]
    pub prime: BigUint,
    pub power: u32,
    /// Recovered symbol, or `?<power>` when no symbol has that code
    pub symbol: String,
    pub known: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodingRecord {
    #[serde(serialize_with = "serde_util::decimal")]
    pub godel_number: BigUint,
    #[serde(serialize_with = "serde_util::factor_map")]
    pub prime_factors: BTreeMap<BigUint, u32>,
    #[serde(serialize_with = "serde_util::decimal_list")]
    pub sorted_primes: Vec<BigUint>,
    pub decoded_symbols: Vec<DecodedSymbol>,
    pub decoded_statement: String,
}

impl DecodingRecord {
    /// True when every exponent mapped to a table symbol
    pub fn is_well_formed(&self) -> bool {
        self.decoded_symbols.iter().all(|s| s.known)
    }
}

/// Full prime-power factorization by trial division.
///
/// Every copy of each divisor is divided out; once `d²` exceeds the
/// remainder, the remainder itself is prime.
pub fn factorize(n: &BigUint, limits: &FactorLimits) -> Result<BTreeMap<BigUint, u32>> {
    if n.is_zero() {
        return Err(Error::InvalidInput("cannot factor zero".into()));
    }

    let started = Instant::now();
    let mut remaining = n.clone();
    let mut factors = BTreeMap::new();
    let mut divisor: u64 = 2;
    let mut checks: u64 = 0;

    while !remaining.is_one() {
        if BigUint::from(divisor) * divisor > remaining {
            factors.insert(remaining, 1);
            break;
        }

        if divisor > limits.max_trial_divisor {
            tracing::warn!(divisor, "trial divisor ceiling reached");
            return Err(Error::FactorizationLimit(format!(
                "no factor found below {} and {} digits remain",
                limits.max_trial_divisor,
                remaining.to_str_radix(10).len()
            )));
        }

        checks += 1;
        if checks % CLOCK_CHECK_INTERVAL == 0 && started.elapsed() > limits.timeout() {
            tracing::warn!(divisor, elapsed_ms = started.elapsed().as_millis() as u64, "factorization timed out");
            return Err(Error::FactorizationLimit(format!(
                "gave up after {} ms at trial divisor {}",
                limits.timeout_ms, divisor
            )));
        }

        let mut exponent = 0u32;
        while (&remaining % divisor).is_zero() {
            remaining /= divisor;
            exponent += 1;
        }
        if exponent > 0 {
            tracing::trace!(prime = divisor, exponent, "found factor");
            factors.insert(BigUint::from(divisor), exponent);
        }

        divisor = if divisor == 2 { 3 } else { divisor + 2 };
    }

    Ok(factors)
}

/// Accept only naturals `n >= 1`
pub fn to_natural(n: &BigInt) -> Result<BigUint> {
    match n.sign() {
        Sign::Plus => Ok(n.magnitude().clone()),
        _ => Err(Error::InvalidInput(format!(
            "Gödel numbers are at least 1, got {}",
            n
        ))),
    }
}

/// Parse decimal text (whitespace and `,`/`_` separators allowed) into a
/// natural number
pub fn parse_godel_number(text: &str) -> Result<BigUint> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    let n: BigInt = cleaned
        .parse()
        .map_err(|_| Error::InvalidInput(format!("'{}' is not an integer", text.trim())))?;

    to_natural(&n)
}

/// Stateless decoder over a borrowed symbol table
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    table: &'a SymbolTable,
    limits: FactorLimits,
}

impl<'a> Decoder<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            limits: FactorLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: FactorLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn decode(&self, n: &BigUint) -> Result<(String, DecodingRecord)> {
        let prime_factors = factorize(n, &self.limits)?;
        let sorted_primes: Vec<BigUint> = prime_factors.keys().cloned().collect();

        let decoded_symbols: Vec<DecodedSymbol> = prime_factors
            .iter()
            .enumerate()
            .map(|(i, (prime, &power))| {
                let resolved = self.table.symbol_of(power);
                DecodedSymbol {
                    position: i + 1,
                    prime: prime.clone(),
                    power,
                    symbol: resolved.to_string(),
                    known: resolved.is_known(),
                }
            })
            .collect();

        let decoded_statement: String = decoded_symbols.iter().map(|s| s.symbol.as_str()).collect();

        let record = DecodingRecord {
            godel_number: n.clone(),
            prime_factors,
            sorted_primes,
            decoded_symbols,
            decoded_statement: decoded_statement.clone(),
        };

        Ok((decoded_statement, record))
    }

    /// Decode a signed integer, rejecting anything below 1
    pub fn decode_signed(&self, n: &BigInt) -> Result<(String, DecodingRecord)> {
        self.decode(&to_natural(n)?)
    }
}
