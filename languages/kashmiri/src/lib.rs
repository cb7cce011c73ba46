//! Rule-based normalizer for Kashmiri text in Perso-Arabic script.
//!
//! [`normalize`] prepares text for ML pipelines: look-alike characters are
//! canonicalized, digits become Latin, punctuation spacing is fixed, and
//! diacritics are optionally removed. [`post_normalize`] additionally applies
//! the final-position yeh rule for text that will be rendered.

pub mod canonicalize;
pub mod constants;
pub mod diacritics;
pub mod digits;
pub mod error;
pub mod orthography;
pub mod processor;
pub mod punctuation;

#[cfg(test)]
mod tests;

pub use canonicalize::{canonicalize, Canonicalizer};
pub use constants::{ALL_CHARACTERS, KASHMIRI_ALPHABET, KASHMIRI_DIACRITICS, KASHMIRI_PUNCTUATIONS};
pub use diacritics::{is_diacritic, strip_diacritics, DiacriticStripper};
pub use digits::{replace_digits, DigitConverter};
pub use error::NormalizerError;
pub use koshur_config::{DigitTarget, NormalizerConfig};
pub use orthography::{apply_final_position_rule, FinalPositionRule};
pub use processor::{normalize, post_normalize, KashmiriNormalizer};
pub use punctuation::{space_punctuation, PunctuationSpacing};
