//! Paradox Generator
//!
//! 1. Remove the placeholder from the text and encode the result.
//! 2. Write that number, in decimal, where the placeholder was.
//! 3. Encode the substituted text.
//!
//! The number in the final statement is the Gödel number of step 1's text,
//! not of the final statement itself.

use crate::classify::{classify, ParadoxType};
use crate::template::{library, ParadoxTemplate};
use crate::{Error, Result};
use godel_core::serde_util;
use godel_core::{EncodingRecord, GodelEngine};
use num_bigint::BigUint;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfReference {
    pub template: ParadoxTemplate,
    pub base_statement: String,
    #[serde(serialize_with = "serde_util::decimal")]
    pub base_godel_number: BigUint,
    pub self_referential_statement: String,
    #[serde(serialize_with = "serde_util::decimal")]
    pub final_godel_number: BigUint,
    pub final_encoding: EncodingRecord,
    pub has_self_reference: bool,
    pub paradox_type: ParadoxType,
}

pub struct ParadoxGenerator<'e> {
    engine: &'e GodelEngine,
    templates: Vec<ParadoxTemplate>,
}

impl<'e> ParadoxGenerator<'e> {
    pub fn new(engine: &'e GodelEngine) -> Self {
        Self {
            engine,
            templates: library(),
        }
    }

    pub fn engine(&self) -> &GodelEngine {
        self.engine
    }

    /// Templates in display order
    pub fn templates(&self) -> &[ParadoxTemplate] {
        &self.templates
    }

    pub fn template(&self, key: &str) -> Result<&ParadoxTemplate> {
        self.templates
            .iter()
            .find(|t| t.key == key)
            .ok_or_else(|| Error::UnknownTemplate(key.to_string()))
    }

    /// Build from a named template, optionally replacing its text.
    ///
    /// When the text lacks the template's placeholder (or the template has
    /// none) nothing is substituted and the final statement is the base.
    pub fn generate(&self, key: &str, custom_text: Option<&str>) -> Result<SelfReference> {
        let template = self.template(key)?.clone();
        let text = custom_text
            .filter(|t| !t.is_empty())
            .unwrap_or(&template.template)
            .to_string();

        let placeholder = template
            .placeholder
            .clone()
            .filter(|p| !p.is_empty() && text.contains(p.as_str()));

        self.construct(template, &text, placeholder.as_deref())
    }

    /// Build from user text; the placeholder must occur in it
    pub fn build_self_referential(&self, text: &str, placeholder: &str) -> Result<SelfReference> {
        if placeholder.is_empty() || !text.contains(placeholder) {
            return Err(Error::PlaceholderNotFound {
                placeholder: placeholder.to_string(),
            });
        }

        self.construct(ParadoxTemplate::custom(text, placeholder), text, Some(placeholder))
    }

    /// Every built-in template with its outcome
    pub fn examples(&self) -> Vec<(String, Result<SelfReference>)> {
        self.templates
            .iter()
            .map(|t| (t.key.clone(), self.generate(&t.key, None)))
            .collect()
    }

    fn construct(
        &self,
        template: ParadoxTemplate,
        text: &str,
        placeholder: Option<&str>,
    ) -> Result<SelfReference> {
        let base_statement = match placeholder {
            Some(p) => text.replace(p, ""),
            None => text.to_string(),
        };
        let (base_godel_number, base_encoding) = self.engine.encode(&base_statement)?;

        let (self_referential_statement, final_godel_number, final_encoding) = match placeholder {
            Some(p) => {
                let substituted = text.replace(p, &base_godel_number.to_str_radix(10));
                let (number, record) = self.engine.encode(&substituted)?;
                (substituted, number, record)
            }
            None => (text.to_string(), base_godel_number.clone(), base_encoding),
        };

        let paradox_type = classify(&self_referential_statement);
        tracing::debug!(
            template = %template.key,
            kind = %paradox_type,
            base_digits = base_godel_number.to_str_radix(10).len(),
            final_digits = final_godel_number.to_str_radix(10).len(),
            "self-reference built"
        );

        Ok(SelfReference {
            template,
            base_statement,
            base_godel_number,
            self_referential_statement,
            final_godel_number,
            final_encoding: (*final_encoding).clone(),
            has_self_reference: placeholder.is_some(),
            paradox_type,
        })
    }
}
