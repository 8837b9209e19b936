//! Gödel engine
//!
//! Owns a symbol table and two caches (statement → encoding, number →
//! decoding). Records are shared as `Arc`s and inserted whole, so readers
//! never see a partially built record. A miss is filled while holding the
//! write lock, so each key is computed at most once.

use crate::config::EngineConfig;
use crate::decoder::{parse_godel_number, to_natural, Decoder, DecodingRecord};
use crate::encoder::{Encoder, EncodingRecord};
use crate::estimate::{estimate_size, SizeEstimate};
use crate::symbols::SymbolTable;
use crate::Result;
use num_bigint::{BigInt, BigUint};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

pub struct GodelEngine {
    config: EngineConfig,
    table: SymbolTable,
    encodings: RwLock<HashMap<String, Arc<EncodingRecord>>>,
    decodings: RwLock<HashMap<BigUint, Arc<DecodingRecord>>>,
}

impl GodelEngine {
    /// Build an engine, applying any extra symbols from the config
    pub fn new(config: EngineConfig) -> Result<Self> {
        let mut table = SymbolTable::for_profile(config.profile);
        for binding in &config.extra_symbols {
            table.add(binding.symbol, binding.code)?;
        }

        tracing::debug!(
            profile = config.profile.name(),
            symbols = table.len(),
            max_length = ?config.effective_max_length(),
            "engine ready"
        );

        Ok(Self::with_table(config, table))
    }

    /// Engine over an explicit table; `config.extra_symbols` is ignored
    pub fn with_table(config: EngineConfig, table: SymbolTable) -> Self {
        Self {
            config,
            table,
            encodings: RwLock::new(HashMap::new()),
            decodings: RwLock::new(HashMap::new()),
        }
    }

    /// Full alphabet, no length cap
    pub fn full() -> Self {
        let config = EngineConfig::full();
        let table = SymbolTable::for_profile(config.profile);
        Self::with_table(config, table)
    }

    /// Arithmetic alphabet, 20-symbol cap
    pub fn simplified() -> Self {
        let config = EngineConfig::simplified();
        let table = SymbolTable::for_profile(config.profile);
        Self::with_table(config, table)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn encoder(&self) -> Encoder<'_> {
        Encoder::new(&self.table)
            .with_fallback_code(self.config.fallback_code)
            .with_max_length(self.config.effective_max_length())
    }

    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.table).with_limits(self.config.factor_limits)
    }

    /// Encode a statement. Over-long statements fail before any lookup.
    ///
    /// A miss is computed under the write lock, so concurrent callers asking
    /// for the same statement wait for one encode instead of repeating it.
    pub fn encode(&self, statement: &str) -> Result<(BigUint, Arc<EncodingRecord>)> {
        let encoder = self.encoder();
        encoder.check_length(statement)?;

        if let Some(record) = self
            .encodings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(statement)
        {
            tracing::debug!(statement, "encoding cache hit");
            return Ok((record.godel_number.clone(), Arc::clone(record)));
        }

        let mut cache = self.encodings.write().unwrap_or_else(PoisonError::into_inner);
        let record = match cache.entry(statement.to_string()) {
            Entry::Occupied(slot) => Arc::clone(slot.get()),
            Entry::Vacant(slot) => {
                let (_, record) = encoder.encode(statement)?;
                Arc::clone(slot.insert(Arc::new(record)))
            }
        };

        Ok((record.godel_number.clone(), record))
    }

    /// Decode a signed integer; anything below 1 is rejected
    pub fn decode(&self, n: &BigInt) -> Result<(String, Arc<DecodingRecord>)> {
        self.decode_natural(&to_natural(n)?)
    }

    /// Decode decimal text
    pub fn decode_str(&self, text: &str) -> Result<(String, Arc<DecodingRecord>)> {
        self.decode_natural(&parse_godel_number(text)?)
    }

    /// Decode a natural number; misses are computed once under the write lock
    pub fn decode_natural(&self, n: &BigUint) -> Result<(String, Arc<DecodingRecord>)> {
        if let Some(record) = self
            .decodings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(n)
        {
            tracing::debug!("decoding cache hit");
            return Ok((record.decoded_statement.clone(), Arc::clone(record)));
        }

        let mut cache = self.decodings.write().unwrap_or_else(PoisonError::into_inner);
        let record = match cache.entry(n.clone()) {
            Entry::Occupied(slot) => Arc::clone(slot.get()),
            Entry::Vacant(slot) => {
                let (_, record) = self.decoder().decode(n)?;
                Arc::clone(slot.insert(Arc::new(record)))
            }
        };

        Ok((record.decoded_statement.clone(), record))
    }

    /// `(symbol, code)` pairs ordered by code
    pub fn symbol_table(&self) -> Vec<(char, u32)> {
        self.table.entries()
    }

    /// Bind a new symbol. Both caches are dropped on success.
    pub fn add_symbol(&mut self, symbol: char, code: u32) -> Result<()> {
        self.table.add(symbol, code)?;
        self.clear_cache();
        tracing::info!(%symbol, code, "symbol added");
        Ok(())
    }

    pub fn estimate_size(&self, statement_length: usize) -> SizeEstimate {
        estimate_size(statement_length, self.config.estimate_average_code)
    }

    pub fn clear_cache(&self) {
        self.encodings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.decodings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// (cached encodings, cached decodings)
    pub fn cache_sizes(&self) -> (usize, usize) {
        (
            self.encodings.read().unwrap_or_else(PoisonError::into_inner).len(),
            self.decodings.read().unwrap_or_else(PoisonError::into_inner).len(),
        )
    }
}

impl Default for GodelEngine {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SymbolBinding;
    use crate::decoder::FactorLimits;
    use crate::symbols::TableProfile;
    use crate::Error;

    #[test]
    fn test_encode_decode_round_trip() {
        let engine = GodelEngine::simplified();
        for statement in ["0=0", "S(0)", "x=0", "0+0=0", "∀x(x=x)", "∀x∀y(x+y=y+x)", "¬(0=S(0))"] {
            let (n, _) = engine.encode(statement).unwrap();
            let (decoded, _) = engine.decode_natural(&n).unwrap();
            assert_eq!(decoded, statement);
        }
    }

    #[test]
    fn test_every_symbol_round_trips() {
        for engine in [GodelEngine::full(), GodelEngine::simplified()] {
            let entries = engine.symbol_table();
            for &(symbol, code) in &entries {
                let (n, record) = engine.encode(&symbol.to_string()).unwrap();
                assert_eq!(n, BigUint::from(2u32).pow(code));
                assert!(!record.positions[0].unknown);
                let (decoded, _) = engine.decode_natural(&n).unwrap();
                assert_eq!(decoded, symbol.to_string());
            }

            let joined: String = entries.iter().map(|(symbol, _)| *symbol).collect();
            let (n, record) = engine.encode(&joined).unwrap();
            assert_eq!(record.unknown_count(), 0);
            let (decoded, _) = engine.decode_natural(&n).unwrap();
            assert_eq!(decoded, joined);
        }
    }

    #[test]
    fn test_concurrent_misses_share_one_record() {
        let engine = GodelEngine::full();
        let records: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| engine.encode("∀x(x=x)").unwrap().1))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(records.iter().all(|r| Arc::ptr_eq(r, &records[0])));
        assert_eq!(engine.cache_sizes(), (1, 0));
    }

    #[test]
    fn test_concrete_value() {
        let engine = GodelEngine::full();
        let (n, record) = engine.encode("0=0").unwrap();
        assert_eq!(n, BigUint::from(17_714_700u64));
        assert_eq!(record.statement, "0=0");
        let (decoded, _) = engine.decode_str("17714700").unwrap();
        assert_eq!(decoded, "0=0");
    }

    #[test]
    fn test_cache_returns_same_record() {
        let engine = GodelEngine::full();
        let (a, first) = engine.encode("S(0)").unwrap();
        let (b, second) = engine.encode("S(0)").unwrap();
        assert_eq!(a, b);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(engine.cache_sizes(), (1, 0));

        engine.decode_natural(&a).unwrap();
        engine.decode_natural(&a).unwrap();
        assert_eq!(engine.cache_sizes(), (1, 1));

        engine.clear_cache();
        assert_eq!(engine.cache_sizes(), (0, 0));
        let (c, third) = engine.encode("S(0)").unwrap();
        assert_eq!(c, a);
        assert_eq!(*third, *first);
    }

    #[test]
    fn test_numeric_statement_and_number_do_not_collide() {
        let engine = GodelEngine::full();
        let (_, encoded) = engine.encode("12").unwrap();
        let (decoded, _) = engine.decode_str("12").unwrap();
        // "12" as text is two unknown symbols; 12 as a number is 2^2 · 3
        assert_eq!(encoded.unknown_count(), 2);
        assert_eq!(decoded, "0?1");
    }

    #[test]
    fn test_simplified_length_cap() {
        let engine = GodelEngine::simplified();
        let long = "S".repeat(21);
        assert_eq!(
            engine.encode(&long).unwrap_err(),
            Error::LengthExceeded { length: 21, max: 20 }
        );
        assert_eq!(engine.cache_sizes(), (0, 0));
        assert!(GodelEngine::full().encode(&long).is_ok());
    }

    #[test]
    fn test_decode_rejects_non_positive() {
        let engine = GodelEngine::full();
        assert!(matches!(engine.decode(&BigInt::from(0)), Err(Error::InvalidInput(_))));
        assert!(matches!(engine.decode(&BigInt::from(-5)), Err(Error::InvalidInput(_))));
        assert!(matches!(engine.decode_str("abc"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_add_symbol_conflict() {
        let mut engine = GodelEngine::full();
        let err = engine.add_symbol('q', 11).unwrap_err();
        assert_eq!(err, Error::CodeAlreadyAssigned { code: 11, symbol: '=' });
        assert_eq!(engine.table().code_of('q'), None);
    }

    #[test]
    fn test_add_symbol_invalidates_cache() {
        let mut engine = GodelEngine::full();
        let (before, _) = engine.encode("q").unwrap();
        engine.add_symbol('q', 71).unwrap();
        assert_eq!(engine.cache_sizes(), (0, 0));

        let (after, record) = engine.encode("q").unwrap();
        assert_ne!(before, after);
        assert!(!record.positions[0].unknown);
        let (decoded, _) = engine.decode_natural(&after).unwrap();
        assert_eq!(decoded, "q");
    }

    #[test]
    fn test_extra_symbols_from_config() {
        let config = EngineConfig {
            extra_symbols: vec![SymbolBinding { symbol: '<', code: 71 }],
            ..EngineConfig::default()
        };
        let engine = GodelEngine::new(config).unwrap();
        assert_eq!(engine.table().code_of('<'), Some(71));

        let clash = EngineConfig {
            extra_symbols: vec![SymbolBinding { symbol: '<', code: 2 }],
            ..EngineConfig::default()
        };
        assert!(matches!(
            GodelEngine::new(clash),
            Err(Error::CodeAlreadyAssigned { code: 2, symbol: '0' })
        ));
    }

    #[test]
    fn test_factor_limit_surfaces() {
        let config = EngineConfig {
            factor_limits: FactorLimits {
                max_trial_divisor: 100,
                timeout_ms: 60_000,
            },
            ..EngineConfig::default()
        };
        let engine = GodelEngine::new(config).unwrap();
        // 10007 · 10009
        let result = engine.decode_str("100160063");
        assert!(matches!(result, Err(Error::FactorizationLimit(_))));
        assert_eq!(engine.cache_sizes(), (0, 0));
    }

    #[test]
    fn test_symbol_table_listing() {
        let engine = GodelEngine::new(EngineConfig {
            profile: TableProfile::Simplified,
            ..EngineConfig::default()
        })
        .unwrap();
        let table = engine.symbol_table();
        assert_eq!(table.len(), 17);
        assert_eq!(table[4], ('=', 11));
    }

    #[test]
    fn test_estimate_uses_config_average() {
        let engine = GodelEngine::new(EngineConfig {
            estimate_average_code: 2,
            ..EngineConfig::default()
        })
        .unwrap();
        assert_eq!(engine.estimate_size(3).digits, 3);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<GodelEngine>();
    }
}
