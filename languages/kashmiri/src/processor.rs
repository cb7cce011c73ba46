use std::path::Path;

use koshur_config::{DigitTarget, NormalizerConfig};
use koshur_core::language::LanguageProcessor;
use koshur_core::{PatternReplacer, Pipeline, UnicodeComposition};

use crate::canonicalize::{canonicalize, Canonicalizer};
use crate::diacritics::{strip_diacritics, DiacriticStripper};
use crate::digits::{replace_digits, DigitConverter};
use crate::error::NormalizerError;
use crate::orthography::apply_final_position_rule;
use crate::punctuation::{space_punctuation, PunctuationSpacing};

/// Canonicalize, convert digits to Latin, fix punctuation spacing and
/// optionally strip diacritics.
///
/// Meant for ML pre-processing. Text that is about to be shown or read should go
/// through [`post_normalize`] instead.
pub fn normalize(text: &str, remove_diacritics: bool) -> String {
    tracing::debug!(len = text.len(), remove_diacritics, "normalize");

    let text = canonicalize(text);
    let text = replace_digits(&text, DigitTarget::Latin);
    let text = space_punctuation(&text);

    if remove_diacritics {
        strip_diacritics(&text)
    } else {
        text
    }
}

/// [`normalize`] followed by the Kashmiri final-position yeh rule
pub fn post_normalize(text: &str) -> String {
    tracing::debug!(len = text.len(), "post_normalize");
    apply_final_position_rule(&normalize(text, false))
}

/// Kashmiri normalizer with a configurable pipeline
pub struct KashmiriNormalizer {
    config: NormalizerConfig,
    pipeline: Pipeline,
}

impl KashmiriNormalizer {
    /// Normalizer running the default pipeline
    pub fn new() -> Self {
        let config = NormalizerConfig::default();
        let pipeline = assemble(&config, None);
        Self { config, pipeline }
    }

    /// Build the pipeline described by `config`, rejecting conflicting extra mappings
    pub fn with_config(config: NormalizerConfig) -> Result<Self, NormalizerError> {
        let extra = if config.extra_mappings.is_empty() {
            None
        } else {
            config.extra_mappings.validate()?;
            Some(PatternReplacer::new(&config.extra_mappings)?)
        };

        let pipeline = assemble(&config, extra);
        tracing::debug!(
            digit_target = config.digit_target.as_str(),
            stages = ?pipeline.stage_names(),
            "built normalizer pipeline"
        );

        Ok(Self { config, pipeline })
    }

    /// Load a JSON config from `path` and build the normalizer it describes
    pub fn from_config_file(path: &Path) -> Result<Self, NormalizerError> {
        let config = NormalizerConfig::load_from_file(path)?;
        Self::with_config(config)
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.pipeline.stage_names()
    }

    /// The fixed base pipeline, independent of this normalizer's config
    pub fn normalize(&self, text: &str, remove_diacritics: bool) -> String {
        normalize(text, remove_diacritics)
    }

    /// The fixed post-processing pipeline, independent of this normalizer's config
    pub fn post_normalize(&self, text: &str) -> String {
        post_normalize(text)
    }

    /// Run the configured pipeline
    pub fn apply(&self, text: &str) -> String {
        self.pipeline.run(text)
    }
}

impl Default for KashmiriNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for KashmiriNormalizer {
    fn language_code(&self) -> &str {
        "ks"
    }

    fn normalize(&self, text: &str) -> String {
        self.apply(text)
    }

    fn post_normalize(&self, text: &str) -> String {
        apply_final_position_rule(&self.apply(text))
    }
}

fn assemble(config: &NormalizerConfig, extra: Option<PatternReplacer>) -> Pipeline {
    let mut pipeline = Pipeline::new();

    if config.compose_unicode {
        pipeline.push(UnicodeComposition);
    }
    pipeline.push(Canonicalizer);
    if let Some(extra) = extra {
        pipeline.push(extra);
    }
    pipeline.push(DigitConverter::new(config.digit_target));
    if config.space_punctuation {
        pipeline.push(PunctuationSpacing);
    }
    if config.remove_diacritics {
        pipeline.push(DiacriticStripper);
    }

    pipeline
}
