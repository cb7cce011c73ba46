use std::collections::HashMap;

use regex::{Captures, Regex};

use crate::error::TableError;
use crate::preprocess::Preprocessor;
use crate::table::EquivalenceTable;

/// Rewrites every variant of an [`EquivalenceTable`] to its canonical form in a
/// single left-to-right scan.
///
/// Variants are tried longest first, so a multi-character variant is never split
/// by a shorter variant it contains. Replacement text is not rescanned.
#[derive(Debug, Clone)]
pub struct PatternReplacer {
    lookup: HashMap<String, String>,
    pattern: Option<Regex>,
}

impl PatternReplacer {
    /// Compile a replacer for `table`.
    ///
    /// The table is not validated here; conflicting variants resolve to the later
    /// entry. Call [`EquivalenceTable::validate`] first for untrusted tables.
    pub fn new(table: &EquivalenceTable) -> Result<Self, TableError> {
        let lookup = table.flatten();

        if lookup.is_empty() {
            return Ok(Self {
                lookup,
                pattern: None,
            });
        }

        let mut variants: Vec<&str> = lookup.keys().map(String::as_str).collect();
        // Longest first; ties broken lexically so the compiled pattern is stable
        variants.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let alternation = variants
            .iter()
            .map(|variant| regex::escape(variant))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&alternation)?;

        Ok(Self {
            lookup,
            pattern: Some(pattern),
        })
    }

    /// Number of distinct variants this replacer matches
    pub fn variant_count(&self) -> usize {
        self.lookup.len()
    }

    pub fn replace(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        pattern
            .replace_all(text, |caps: &Captures| {
                let matched = &caps[0];
                self.lookup
                    .get(matched)
                    .cloned()
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned()
    }
}

impl Preprocessor for PatternReplacer {
    fn name(&self) -> &str {
        "replace"
    }

    fn process(&self, text: &str) -> String {
        self.replace(text)
    }
}

/// One-shot replacement: builds the lookup and pattern for this call only
pub fn replace(text: &str, table: &EquivalenceTable) -> Result<String, TableError> {
    Ok(PatternReplacer::new(table)?.replace(text))
}
