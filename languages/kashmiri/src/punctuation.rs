use koshur_core::{Preprocessor, PunctuationSpacer};
use once_cell::sync::Lazy;

use crate::constants::KASHMIRI_PUNCTUATIONS;

static SPACER: Lazy<PunctuationSpacer> = Lazy::new(|| {
    PunctuationSpacer::new(KASHMIRI_PUNCTUATIONS)
        .unwrap_or_else(|e| panic!("built-in punctuation set failed to compile: {e}"))
});

/// One space after each Kashmiri punctuation mark, none before it
pub fn space_punctuation(text: &str) -> String {
    SPACER.apply(text)
}

/// Pipeline stage for [`space_punctuation`]
pub struct PunctuationSpacing;

impl Preprocessor for PunctuationSpacing {
    fn name(&self) -> &str {
        "space_punctuation"
    }

    fn process(&self, text: &str) -> String {
        space_punctuation(text)
    }
}
