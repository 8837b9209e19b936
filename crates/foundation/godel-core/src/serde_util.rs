//! Serde helpers for big integers.
//!
//! Gödel numbers routinely exceed any JSON number type, so they are written
//! as decimal strings.

use num_bigint::BigUint;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::Serializer;
use std::collections::BTreeMap;

pub fn decimal<S: Serializer>(n: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&n.to_str_radix(10))
}

pub fn decimal_list<S: Serializer>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for n in values {
        seq.serialize_element(&n.to_str_radix(10))?;
    }
    seq.end()
}

/// Prime → exponent map with decimal-string keys
pub fn factor_map<S: Serializer>(
    factors: &BTreeMap<BigUint, u32>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(factors.len()))?;
    for (prime, exponent) in factors {
        map.serialize_entry(&prime.to_str_radix(10), exponent)?;
    }
    map.end()
}
