//! Self-reference over Gödel numbers
//!
//! Builds statements that textually contain a Gödel number, classifies the
//! resulting paradox, and explains how it connects to incompleteness.
//!
//! The embedded number encodes the statement *before* substitution. This is
//! an illustration of the diagonal technique, not a fixed point.
//!
//! # Modules
//! - `template` - Named paradox templates
//! - `classify` - Keyword classification of paradox types
//! - `generator` - Self-referential statement construction
//! - `analysis` - Educational breakdown of a generated paradox

pub mod analysis;
pub mod classify;
pub mod generator;
pub mod template;

pub use analysis::{analyze, IncompletenessConnection, ParadoxAnalysis};
pub use classify::{classify, ParadoxType};
pub use generator::{ParadoxGenerator, SelfReference};
pub use template::{library, ParadoxTemplate, DEFAULT_PLACEHOLDER};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] godel_core::Error),

    #[error("Placeholder '{placeholder}' not found in statement")]
    PlaceholderNotFound { placeholder: String },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
