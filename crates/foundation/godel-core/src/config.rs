//! Engine configuration

use crate::decoder::FactorLimits;
use crate::estimate::DEFAULT_AVERAGE_CODE;
use crate::symbols::{TableProfile, FALLBACK_CODE};
use serde::{Deserialize, Serialize};

/// Extra symbol added on top of the profile's alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolBinding {
    pub symbol: char,
    pub code: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Starting alphabet
    pub profile: TableProfile,
    /// Statement cap; `None` falls back to the profile's cap
    pub max_length: Option<usize>,
    /// Code for characters outside the table
    pub fallback_code: u32,
    /// Budget for decode factorization
    pub factor_limits: FactorLimits,
    /// Assumed code per position in size estimates
    pub estimate_average_code: u32,
    /// Added in order at engine construction
    pub extra_symbols: Vec<SymbolBinding>,
}

impl EngineConfig {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn simplified() -> Self {
        Self {
            profile: TableProfile::Simplified,
            ..Self::default()
        }
    }

    /// Cap actually enforced by the encoder
    pub fn effective_max_length(&self) -> Option<usize> {
        self.max_length.or_else(|| self.profile.default_max_length())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile: TableProfile::Full,
            max_length: None,
            fallback_code: FALLBACK_CODE,
            factor_limits: FactorLimits::default(),
            estimate_average_code: DEFAULT_AVERAGE_CODE,
            extra_symbols: Vec::new(),
        }
    }
}
