//! Paradox Analysis
//!
//! Educational breakdown of a generated self-reference: how the
//! substitution worked, what the encoding looks like, and which
//! incompleteness theorem it points at.

use crate::classify::ParadoxType;
use crate::generator::SelfReference;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IncompletenessConnection {
    /// Statement asserts its own unprovability
    First,
    /// Statement concerns the system's consistency
    Second,
    General,
}

impl IncompletenessConnection {
    pub fn detect(statement: &str) -> Self {
        let lower = statement.to_lowercase();
        if lower.contains("unprovable") {
            IncompletenessConnection::First
        } else if lower.contains("consistent") {
            IncompletenessConnection::Second
        } else {
            IncompletenessConnection::General
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            IncompletenessConnection::First => {
                "First Incompleteness Theorem: the statement claims it cannot be proven. \
                 If the system proved it, the statement would be false. If the system cannot \
                 prove it, the statement is true but unprovable, so the system is incomplete."
            }
            IncompletenessConnection::Second => {
                "Second Incompleteness Theorem: a consistent formal system cannot prove its \
                 own consistency."
            }
            IncompletenessConnection::General => {
                "Self-reference inside a formal system can produce undecidable statements, \
                 which is the core insight behind the incompleteness theorems."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParadoxAnalysis {
    pub paradox_name: String,
    pub paradox_type: ParadoxType,
    pub explanation: String,
    pub self_reference_mechanism: String,
    pub godel_numbering_analysis: String,
    pub incompleteness_connection: IncompletenessConnection,
    pub incompleteness_explanation: String,
}

pub fn analyze(record: &SelfReference) -> ParadoxAnalysis {
    let connection = IncompletenessConnection::detect(&record.self_referential_statement);

    ParadoxAnalysis {
        paradox_name: record.template.name.clone(),
        paradox_type: record.paradox_type,
        explanation: record.template.explanation.clone(),
        self_reference_mechanism: self_reference_mechanism(record),
        godel_numbering_analysis: numbering_analysis(record),
        incompleteness_connection: connection,
        incompleteness_explanation: connection.explanation().to_string(),
    }
}

fn self_reference_mechanism(record: &SelfReference) -> String {
    if !record.has_self_reference {
        return "No explicit self-reference; the statement illustrates a meta-mathematical \
                property of the system."
            .to_string();
    }

    format!(
        "1. The base statement '{}' encodes to {}.\n\
         2. That number is substituted back into the statement.\n\
         3. The final statement '{}' refers to itself.\n\
         4. The reference is circular and cannot be resolved consistently.",
        record.base_statement, record.base_godel_number, record.self_referential_statement
    )
}

fn numbering_analysis(record: &SelfReference) -> String {
    let encoding = &record.final_encoding;
    let factors: Vec<String> = encoding
        .prime_factors
        .iter()
        .map(|(p, e)| format!("{}^{}", p, e))
        .collect();

    format!(
        "Statement length: {} symbols\n\
         Final Gödel number: {} ({} digits)\n\
         Prime factors: {}\n\
         Unknown symbols (fallback code): {}",
        encoding.len(),
        encoding.godel_number,
        encoding.godel_number.to_str_radix(10).len(),
        factors.join(" · "),
        encoding.unknown_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ParadoxGenerator;
    use godel_core::GodelEngine;

    #[test]
    fn test_quine_analysis() {
        let engine = GodelEngine::full();
        let generator = ParadoxGenerator::new(&engine);
        let record = generator.generate("quine", None).unwrap();
        let analysis = analyze(&record);

        assert_eq!(analysis.paradox_name, "Mathematical Quine");
        assert_eq!(analysis.paradox_type, ParadoxType::Provability);
        assert_eq!(analysis.incompleteness_connection, IncompletenessConnection::First);
        assert!(analysis
            .self_reference_mechanism
            .contains(&record.base_godel_number.to_string()));
        assert!(analysis.godel_numbering_analysis.starts_with("Statement length:"));
    }

    #[test]
    fn test_consistency_analysis() {
        let engine = GodelEngine::full();
        let generator = ParadoxGenerator::new(&engine);
        let record = generator.generate("consistency", None).unwrap();
        let analysis = analyze(&record);

        assert_eq!(analysis.incompleteness_connection, IncompletenessConnection::Second);
        assert!(analysis.self_reference_mechanism.starts_with("No explicit self-reference"));
    }

    #[test]
    fn test_detect() {
        assert_eq!(IncompletenessConnection::detect("It is TRUE"), IncompletenessConnection::General);
        assert_eq!(
            IncompletenessConnection::detect("unprovable and consistent"),
            IncompletenessConnection::First
        );
    }
}
