//! Symbol Table
//!
//! Bijection between alphabet symbols and their codes. A code is the
//! exponent applied to a position prime, so codes must be positive and
//! pairwise distinct.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Code given to characters outside the table (next prime after 61)
pub const FALLBACK_CODE: u32 = 67;

/// Default statement cap for the simplified alphabet
pub const SIMPLIFIED_MAX_LENGTH: usize = 20;

/// Canonical arithmetic alphabet shared by both profiles
const ARITHMETIC_SYMBOLS: &[(char, u32)] = &[
    ('0', 2),  // zero
    ('S', 3),  // successor
    ('+', 5),
    ('×', 7),
    ('=', 11),
    ('(', 13),
    (')', 17),
    ('¬', 19),
    ('→', 23),
    ('∀', 29),
    ('∃', 31),
    ('a', 37),
    ('b', 41),
    ('c', 43),
    ('x', 47),
    ('y', 53),
    ('z', 59),
];

/// Space is only part of the full alphabet
const SPACE: (char, u32) = (' ', 61);

/// Which shipped alphabet to start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableProfile {
    #[default]
    Full,
    Simplified,
}

impl TableProfile {
    pub fn name(&self) -> &'static str {
        match self {
            TableProfile::Full => "full",
            TableProfile::Simplified => "simplified",
        }
    }

    /// Statement cap enforced by this profile, if any
    pub fn default_max_length(&self) -> Option<usize> {
        match self {
            TableProfile::Full => None,
            TableProfile::Simplified => Some(SIMPLIFIED_MAX_LENGTH),
        }
    }
}

impl std::str::FromStr for TableProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "full" => Ok(TableProfile::Full),
            "simplified" | "simple" => Ok(TableProfile::Simplified),
            other => Err(Error::InvalidInput(format!(
                "unknown table profile '{}' (use: full, simplified)",
                other
            ))),
        }
    }
}

/// Result of looking up a code in the inverse table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Symbol(char),
    /// No symbol carries this code
    Unknown(u32),
}

impl Resolved {
    pub fn is_known(&self) -> bool {
        matches!(self, Resolved::Symbol(_))
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Symbol(c) => write!(f, "{}", c),
            Resolved::Unknown(code) => write!(f, "?{}", code),
        }
    }
}

/// Symbol ↔ code mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    forward: HashMap<char, u32>,
    reverse: BTreeMap<u32, char>,
}

impl SymbolTable {
    /// Empty table
    pub fn empty() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: BTreeMap::new(),
        }
    }

    /// Table for one of the shipped profiles
    pub fn for_profile(profile: TableProfile) -> Self {
        let mut table = Self::empty();
        for &(symbol, code) in ARITHMETIC_SYMBOLS {
            table.forward.insert(symbol, code);
            table.reverse.insert(code, symbol);
        }
        if profile == TableProfile::Full {
            table.forward.insert(SPACE.0, SPACE.1);
            table.reverse.insert(SPACE.1, SPACE.0);
        }
        table
    }

    pub fn full() -> Self {
        Self::for_profile(TableProfile::Full)
    }

    pub fn simplified() -> Self {
        Self::for_profile(TableProfile::Simplified)
    }

    /// Code for a symbol, if it is in the alphabet
    pub fn code_of(&self, symbol: char) -> Option<u32> {
        self.forward.get(&symbol).copied()
    }

    /// Symbol for a code; unknown codes resolve to a sentinel
    pub fn symbol_of(&self, code: u32) -> Resolved {
        match self.reverse.get(&code) {
            Some(&symbol) => Resolved::Symbol(symbol),
            None => Resolved::Unknown(code),
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.forward.contains_key(&symbol)
    }

    /// Bind `symbol` to `code`.
    ///
    /// Rejected without touching the table when the code already belongs to
    /// another symbol. Re-binding a symbol moves it off its old code.
    pub fn add(&mut self, symbol: char, code: u32) -> Result<()> {
        if code == 0 {
            return Err(Error::InvalidInput(format!(
                "code for '{}' must be positive",
                symbol
            )));
        }

        match self.reverse.get(&code) {
            Some(&existing) if existing == symbol => return Ok(()),
            Some(&existing) => {
                return Err(Error::CodeAlreadyAssigned {
                    code,
                    symbol: existing,
                })
            }
            None => {}
        }

        if let Some(old) = self.forward.insert(symbol, code) {
            self.reverse.remove(&old);
        }
        self.reverse.insert(code, symbol);
        Ok(())
    }

    /// All pairs ordered by code
    pub fn entries(&self) -> Vec<(char, u32)> {
        self.reverse.iter().map(|(&code, &symbol)| (symbol, code)).collect()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::full()
    }
}
