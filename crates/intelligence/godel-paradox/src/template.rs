//! Paradox Templates

use serde::Serialize;

/// Marker replaced by the statement's Gödel number
pub const DEFAULT_PLACEHOLDER: &str = "G(THIS)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParadoxTemplate {
    /// Lookup key, e.g. `liar_paradox`
    pub key: String,
    pub name: String,
    pub template: String,
    pub description: String,
    pub placeholder: Option<String>,
    pub explanation: String,
}

impl ParadoxTemplate {
    fn builtin(
        key: &str,
        name: &str,
        template: &str,
        description: &str,
        placeholder: Option<&str>,
        explanation: &str,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            template: template.into(),
            description: description.into(),
            placeholder: placeholder.map(Into::into),
            explanation: explanation.into(),
        }
    }

    /// Ad-hoc template wrapping user text
    pub fn custom(text: &str, placeholder: &str) -> Self {
        Self::builtin(
            "custom",
            "Custom Self-Reference",
            text,
            "A user-supplied statement that embeds a Gödel number.",
            Some(placeholder),
            "The placeholder is replaced by the Gödel number of the statement without it, \
             so the statement talks about (a version of) itself.",
        )
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }
}

/// Built-in templates in display order
pub fn library() -> Vec<ParadoxTemplate> {
    vec![
        ParadoxTemplate::builtin(
            "liar_paradox",
            "Liar Paradox",
            "This statement is false",
            "A statement that cannot be consistently assigned a truth value.",
            Some(DEFAULT_PLACEHOLDER),
            "If the statement is true, then it must be false. If it is false, then it must be true.",
        ),
        ParadoxTemplate::builtin(
            "quine",
            "Mathematical Quine",
            "The statement with Gödel number G(THIS) is unprovable",
            "A statement that refers to its own Gödel number.",
            Some(DEFAULT_PLACEHOLDER),
            "This statement claims about itself that it cannot be proven within the formal system.",
        ),
        ParadoxTemplate::builtin(
            "provability",
            "Provability Paradox",
            "The statement with Gödel number G(THIS) is provable",
            "A statement about its own provability.",
            Some(DEFAULT_PLACEHOLDER),
            "If provable, it must be true, but if true, it must be provable.",
        ),
        ParadoxTemplate::builtin(
            "truth",
            "Truth Paradox",
            "The statement with Gödel number G(THIS) is true",
            "A statement that claims its own truth.",
            Some(DEFAULT_PLACEHOLDER),
            "This statement refers to itself and claims to be true, creating a circular reference.",
        ),
        ParadoxTemplate::builtin(
            "consistency",
            "Consistency Statement",
            "The formal system is consistent",
            "A statement about the consistency of the formal system itself.",
            None,
            "Gödel showed that if a formal system is consistent, it cannot prove its own consistency.",
        ),
    ]
}

/// Built-in template by key
pub fn find(key: &str) -> Option<ParadoxTemplate> {
    library().into_iter().find(|t| t.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_order() {
        let keys: Vec<String> = library().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["liar_paradox", "quine", "provability", "truth", "consistency"]);
    }

    #[test]
    fn test_find() {
        let quine = find("quine").unwrap();
        assert_eq!(quine.name, "Mathematical Quine");
        assert!(quine.template.contains(DEFAULT_PLACEHOLDER));
        assert!(!find("consistency").unwrap().has_placeholder());
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_custom_template() {
        let t = ParadoxTemplate::custom("N is G(N)", "G(N)");
        assert_eq!(t.key, "custom");
        assert_eq!(t.placeholder.as_deref(), Some("G(N)"));
    }
}
