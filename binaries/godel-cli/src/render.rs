//! Plain-text rendering of engine records

use godel_core::{DecodingRecord, EncodingRecord};
use godel_paradox::{ParadoxAnalysis, SelfReference};

/// Longest number printed in full
const MAX_INLINE_DIGITS: usize = 120;

/// Shortened decimal for very large numbers
fn number(n: &impl ToString) -> String {
    let digits = n.to_string();
    if digits.len() <= MAX_INLINE_DIGITS {
        return digits;
    }
    format!(
        "{}...{} ({} digits)",
        &digits[..40],
        &digits[digits.len() - 20..],
        digits.len()
    )
}

pub fn encoding(record: &EncodingRecord) -> String {
    let mut lines = Vec::new();
    lines.push(format!("  Statement:   {}", record.statement));
    lines.push(format!("  Length:      {} symbols", record.len()));
    lines.push(format!("  Gödel number: {}", number(&record.godel_number)));
    lines.push(String::new());
    lines.push("  POS  SYMBOL  CODE  PRIME  CONTRIBUTION".to_string());

    for p in &record.positions {
        let note = if p.unknown { "  (unknown symbol)" } else { "" };
        lines.push(format!(
            "  {:>3}  {:^6}  {:>4}  {:>5}  {}^{} = {}{}",
            p.position,
            p.symbol,
            p.code,
            p.prime,
            p.prime,
            p.code,
            number(&p.contribution),
            note
        ));
    }

    lines.join("\n")
}

pub fn decoding(record: &DecodingRecord) -> String {
    let mut lines = Vec::new();
    lines.push(format!("  Gödel number: {}", number(&record.godel_number)));

    let factors: Vec<String> = record
        .prime_factors
        .iter()
        .map(|(p, e)| format!("{}^{}", p, e))
        .collect();
    lines.push(format!(
        "  Factors:     {}",
        if factors.is_empty() { "(none)".to_string() } else { factors.join(" · ") }
    ));
    lines.push(format!("  Statement:   \"{}\"", record.decoded_statement));
    if !record.is_well_formed() {
        lines.push("  Note:        ?N marks an exponent with no symbol".to_string());
    }
    lines.push(String::new());

    for s in &record.decoded_symbols {
        lines.push(format!(
            "  Position {:>3}: {}^{} → '{}'",
            s.position, s.prime, s.power, s.symbol
        ));
    }

    lines.join("\n")
}

pub fn symbol_table(entries: &[(char, u32)]) -> String {
    entries
        .iter()
        .map(|(symbol, code)| {
            let shown = if *symbol == ' ' { "space".to_string() } else { symbol.to_string() };
            format!("  {:<6} → {}", shown, code)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn self_reference(record: &SelfReference) -> String {
    let mut lines = Vec::new();
    lines.push(format!("  Template:    {}", record.template.template));
    lines.push(format!("  Base:        {}", record.base_statement));
    lines.push(format!("  Base number: {}", number(&record.base_godel_number)));
    if record.has_self_reference {
        lines.push(format!("  Final:       {}", record.self_referential_statement));
        lines.push(format!("  Final number: {}", number(&record.final_godel_number)));
    } else {
        lines.push("  (no placeholder, nothing substituted)".to_string());
    }
    lines.push(format!("  Type:        {}", record.paradox_type));
    lines.join("\n")
}

pub fn analysis(analysis: &ParadoxAnalysis) -> String {
    let mut lines = Vec::new();
    lines.push("  ANALYSIS".to_string());
    lines.push("  ════════".to_string());
    lines.push(format!("  {}", analysis.explanation));
    lines.push(String::new());
    lines.extend(analysis.self_reference_mechanism.lines().map(|l| format!("  {}", l)));
    lines.push(String::new());
    lines.extend(
        analysis
            .godel_numbering_analysis
            .lines()
            .map(|l| format!("  {}", l)),
    );
    lines.push(String::new());
    lines.push(format!("  {}", analysis.incompleteness_explanation));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use godel_core::GodelEngine;

    #[test]
    fn test_number_shortening() {
        assert_eq!(number(&17714700u64), "17714700");
        let long = "7".repeat(200);
        let shown = number(&long);
        assert!(shown.ends_with("(200 digits)"));
        assert!(shown.len() < 100);
    }

    #[test]
    fn test_encoding_table() {
        let engine = GodelEngine::full();
        let (_, record) = engine.encode("0=ö").unwrap();
        let text = encoding(&record);
        assert!(text.contains("3^11 = 177147"));
        assert!(text.contains("(unknown symbol)"));
    }

    #[test]
    fn test_decoding_marks_unknown() {
        let engine = GodelEngine::full();
        let (_, record) = engine.decode_str("324").unwrap();
        let text = decoding(&record);
        assert!(text.contains("\"0?4\""));
        assert!(text.contains("?N marks"));
    }
}
