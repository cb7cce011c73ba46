use koshur_core::{PatternReplacer, Preprocessor};
use once_cell::sync::Lazy;

use crate::constants::{character_table, compile, punctuation_table};

static CHARACTERS: Lazy<PatternReplacer> =
    Lazy::new(|| compile("character", &character_table()));

static PUNCTUATION: Lazy<PatternReplacer> =
    Lazy::new(|| compile("punctuation", &punctuation_table()));

/// Rewrite look-alike letters and punctuation to their canonical Kashmiri forms
pub fn canonicalize(text: &str) -> String {
    let text = CHARACTERS.replace(text);
    PUNCTUATION.replace(&text)
}

/// Pipeline stage for [`canonicalize`]
pub struct Canonicalizer;

impl Preprocessor for Canonicalizer {
    fn name(&self) -> &str {
        "canonicalize"
    }

    fn process(&self, text: &str) -> String {
        canonicalize(text)
    }
}
