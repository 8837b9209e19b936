//! Paradox classification by keyword

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParadoxType {
    #[serde(rename = "Truth Value Paradox")]
    TruthValue,
    #[serde(rename = "Provability Paradox")]
    Provability,
    #[serde(rename = "Meta-mathematical Paradox")]
    MetaMathematical,
    #[serde(rename = "Self-Reference Paradox")]
    SelfReference,
}

impl ParadoxType {
    pub fn name(&self) -> &'static str {
        match self {
            ParadoxType::TruthValue => "Truth Value Paradox",
            ParadoxType::Provability => "Provability Paradox",
            ParadoxType::MetaMathematical => "Meta-mathematical Paradox",
            ParadoxType::SelfReference => "Self-Reference Paradox",
        }
    }
}

impl fmt::Display for ParadoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checked in order; first hit wins
const KEYWORDS: &[(&str, ParadoxType)] = &[
    ("false", ParadoxType::TruthValue),
    ("unprovable", ParadoxType::Provability),
    ("provable", ParadoxType::Provability),
    ("consistent", ParadoxType::MetaMathematical),
];

/// Case-insensitive keyword match over the statement text
pub fn classify(statement: &str) -> ParadoxType {
    let lower = statement.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, kind)| kind)
        .unwrap_or(ParadoxType::SelfReference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(classify("This statement is FALSE"), ParadoxType::TruthValue);
        assert_eq!(classify("G is unprovable"), ParadoxType::Provability);
        assert_eq!(classify("G is provable"), ParadoxType::Provability);
        assert_eq!(classify("The system is Consistent"), ParadoxType::MetaMathematical);
        assert_eq!(classify("G is true"), ParadoxType::SelfReference);
    }

    #[test]
    fn test_priority() {
        // "false" outranks "provable"
        assert_eq!(classify("provably false"), ParadoxType::TruthValue);
        assert_eq!(classify("inconsistent but provable"), ParadoxType::Provability);
    }

    #[test]
    fn test_serialized_name() {
        let json = serde_json::to_string(&ParadoxType::MetaMathematical).unwrap();
        assert_eq!(json, "\"Meta-mathematical Paradox\"");
    }
}
