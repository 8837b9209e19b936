//! Encoder
//!
//! Statement → Gödel number. Position i (1-based) contributes
//! `prime_i ^ code(symbol_i)`; the Gödel number is the product.

use crate::primes::first_n_primes;
use crate::serde_util;
use crate::symbols::{SymbolTable, FALLBACK_CODE};
use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::One;
use serde::Serialize;
use std::collections::BTreeMap;

/// One position of an encoded statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEncoding {
    pub position: usize,
    pub symbol: char,
    /// Exponent applied to the position prime
    pub code: u32,
    pub prime: u64,
    #[serde(serialize_with = "serde_util::decimal")]
    pub contribution: BigUint,
    /// Symbol was outside the table and took the fallback code
    pub unknown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodingRecord {
    pub statement: String,
    pub symbols: Vec<char>,
    pub positions: Vec<SymbolEncoding>,
    /// Position prime → accumulated exponent
    pub prime_factors: BTreeMap<u64, u32>,
    #[serde(serialize_with = "serde_util::decimal")]
    pub godel_number: BigUint,
}

impl EncodingRecord {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of positions that used the fallback code
    pub fn unknown_count(&self) -> usize {
        self.positions.iter().filter(|p| p.unknown).count()
    }
}

/// Stateless encoder over a borrowed symbol table
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    table: &'a SymbolTable,
    fallback_code: u32,
    max_length: Option<usize>,
}

impl<'a> Encoder<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            fallback_code: FALLBACK_CODE,
            max_length: None,
        }
    }

    pub fn with_fallback_code(mut self, code: u32) -> Self {
        self.fallback_code = code;
        self
    }

    /// Reject statements longer than `max` symbols
    pub fn with_max_length(mut self, max: Option<usize>) -> Self {
        self.max_length = max;
        self
    }

    /// Fails only when a length cap is set and exceeded
    pub fn check_length(&self, statement: &str) -> Result<()> {
        if let Some(max) = self.max_length {
            let length = statement.chars().count();
            if length > max {
                return Err(Error::LengthExceeded { length, max });
            }
        }
        Ok(())
    }

    pub fn encode(&self, statement: &str) -> Result<(BigUint, EncodingRecord)> {
        self.check_length(statement)?;

        let symbols: Vec<char> = statement.chars().collect();
        let primes = first_n_primes(symbols.len());

        let mut positions = Vec::with_capacity(symbols.len());
        let mut prime_factors = BTreeMap::new();
        let mut godel_number = BigUint::one();

        for (i, (&symbol, &prime)) in symbols.iter().zip(primes.iter()).enumerate() {
            let (code, unknown) = match self.table.code_of(symbol) {
                Some(code) => (code, false),
                None => (self.fallback_code, true),
            };

            let contribution = BigUint::from(prime).pow(code);
            godel_number *= &contribution;
            *prime_factors.entry(prime).or_insert(0) += code;

            positions.push(SymbolEncoding {
                position: i + 1,
                symbol,
                code,
                prime,
                contribution,
                unknown,
            });
        }

        let record = EncodingRecord {
            statement: statement.to_string(),
            symbols,
            positions,
            prime_factors,
            godel_number: godel_number.clone(),
        };

        Ok((godel_number, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_zero_equals_zero() {
        let table = SymbolTable::full();
        let (n, record) = Encoder::new(&table).encode("0=0").unwrap();

        assert_eq!(n, big(17_714_700));
        assert_eq!(record.godel_number, n);
        assert_eq!(record.symbols, vec!['0', '=', '0']);
        let codes: Vec<u32> = record.positions.iter().map(|p| p.code).collect();
        assert_eq!(codes, vec![2, 11, 2]);
        let primes: Vec<u64> = record.positions.iter().map(|p| p.prime).collect();
        assert_eq!(primes, vec![2, 3, 5]);
        assert_eq!(record.positions[1].contribution, big(177_147));
        assert_eq!(record.prime_factors, BTreeMap::from([(2, 2), (3, 11), (5, 2)]));
    }

    #[test]
    fn test_successor_of_zero() {
        let table = SymbolTable::full();
        let (n, _) = Encoder::new(&table).encode("S(0)").unwrap();
        let expected = big(2).pow(3) * big(3).pow(13) * big(5).pow(2) * big(7).pow(17);
        assert_eq!(n, expected);
    }

    #[test]
    fn test_empty_statement() {
        let table = SymbolTable::full();
        let (n, record) = Encoder::new(&table).encode("").unwrap();
        assert_eq!(n, BigUint::one());
        assert!(record.is_empty());
        assert!(record.prime_factors.is_empty());
    }

    #[test]
    fn test_unknown_symbol_uses_fallback() {
        let table = SymbolTable::full();
        let (n, record) = Encoder::new(&table).encode("ö").unwrap();
        assert_eq!(n, big(2).pow(FALLBACK_CODE));
        assert!(record.positions[0].unknown);
        assert_eq!(record.unknown_count(), 1);

        let (custom, _) = Encoder::new(&table).with_fallback_code(71).encode("ö").unwrap();
        assert_eq!(custom, big(2).pow(71));
    }

    #[test]
    fn test_length_cap() {
        let table = SymbolTable::simplified();
        let encoder = Encoder::new(&table).with_max_length(Some(20));
        assert!(encoder.encode(&"0".repeat(20)).is_ok());
        let err = encoder.encode(&"0".repeat(21)).unwrap_err();
        assert_eq!(err, Error::LengthExceeded { length: 21, max: 20 });
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let table = SymbolTable::simplified();
        let encoder = Encoder::new(&table).with_max_length(Some(3));
        // 3 chars, 7 bytes
        assert!(encoder.encode("∀x¬").is_ok());
    }

    #[test]
    fn test_deterministic() {
        let table = SymbolTable::full();
        let encoder = Encoder::new(&table);
        let a = encoder.encode("∀x(x=x)").unwrap();
        let b = encoder.encode("∀x(x=x)").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_appending_grows_number() {
        let table = SymbolTable::full();
        let encoder = Encoder::new(&table);
        let mut statement = String::new();
        let mut previous = BigUint::one();
        for c in "S(0)+S(0)=S(S(0))".chars() {
            statement.push(c);
            let (n, _) = encoder.encode(&statement).unwrap();
            assert!(n > previous, "no growth after appending {:?}", c);
            previous = n;
        }
    }

    #[test]
    fn test_twenty_symbols_is_huge() {
        let table = SymbolTable::full();
        let (n, _) = Encoder::new(&table).encode("∀x∀y(x+y=y+x)→(0=0)").unwrap();
        assert!(n.to_str_radix(10).len() > 100);
    }
}
