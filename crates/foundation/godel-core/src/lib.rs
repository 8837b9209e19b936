//! Gödel Numbering Engine
//!
//! Encodes short logical statements as natural numbers via prime powers and
//! recovers them by factorization.
//!
//! ```text
//!   "0=0"  ──►  2^2 · 3^11 · 5^2  =  17714700
//!    │ │ │      │     │      │
//!    │ │ └──────┼─────┼──────┘  position 3: prime 5, code('0') = 2
//!    │ └────────┼─────┘         position 2: prime 3, code('=') = 11
//!    └──────────┘               position 1: prime 2, code('0') = 2
//! ```
//!
//! # Modules
//! - `symbols` - Symbol ↔ code bijection (full and simplified alphabets)
//! - `primes` - Position prime sequence
//! - `encoder` - Statement → Gödel number
//! - `decoder` - Gödel number → statement (trial-division factorization)
//! - `estimate` - Size estimate before a full encode
//! - `engine` - Engine instance owning the symbol table and caches
//! - `config` - Engine configuration

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod engine;
pub mod estimate;
pub mod primes;
pub mod serde_util;
pub mod symbols;

pub use config::{EngineConfig, SymbolBinding};
pub use decoder::{factorize, parse_godel_number, DecodedSymbol, Decoder, DecodingRecord, FactorLimits};
pub use encoder::{Encoder, EncodingRecord, SymbolEncoding};
pub use engine::GodelEngine;
pub use estimate::{estimate_size, SizeEstimate};
pub use primes::{first_n_primes, is_prime, Primes};
pub use symbols::{Resolved, SymbolTable, TableProfile, FALLBACK_CODE};

pub use num_bigint::{BigInt, BigUint};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Statement too long: {length} symbols (maximum is {max})")]
    LengthExceeded { length: usize, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Code {code} is already assigned to '{symbol}'")]
    CodeAlreadyAssigned { code: u32, symbol: char },

    #[error("Input too large to factor: {0}")]
    FactorizationLimit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
