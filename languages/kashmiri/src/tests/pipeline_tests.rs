use std::collections::BTreeMap;

use koshur_config::{DigitTarget, NormalizerConfig};
use koshur_core::language::LanguageProcessor;
use koshur_core::{EquivalenceTable, TableError};

use crate::error::NormalizerError;
use crate::processor::{normalize, post_normalize, KashmiriNormalizer};

#[test]
fn test_ascii_comma_is_kept_and_spaced() {
    let input = "\u{0633}\u{0644}\u{0627}\u{0645},\u{062F}\u{0646}\u{06CC}\u{0627}";
    assert_eq!(
        normalize(input, false),
        "\u{0633}\u{0644}\u{0627}\u{0645}, \u{062F}\u{0646}\u{06CC}\u{0627}"
    );
}

#[test]
fn test_latin_text_keeps_letters_and_digits() {
    assert_eq!(normalize("Hello 123!", false), "Hello 123!");
}

#[test]
fn test_latin_punctuation_only_gets_spacing() {
    assert_eq!(normalize("Hello, world? a;b", false), "Hello, world? a; b");
    assert_eq!(normalize("Hello ,world", false), "Hello, world");
}

#[test]
fn test_pipeline_order() {
    // Arabic kaf and yeh, Persian digits, stray space before the full stop
    let input = "\u{0643}\u{062A}\u{0627}\u{0628} \u{06F2}\u{06F0} \u{0648}\u{0631}\u{0642}\u{064A} .";
    let expected = "\u{06A9}\u{062A}\u{0627}\u{0628} 20 \u{0648}\u{0631}\u{0642}\u{06CC}.";
    assert_eq!(normalize(input, false), expected);
}

#[test]
fn test_diacritics_only_removed_on_request() {
    let input = "\u{06A9}\u{064E}\u{0634}\u{0650}\u{0631}";
    assert_eq!(normalize(input, false), input);
    assert_eq!(normalize(input, true), "\u{06A9}\u{0634}\u{0631}");
}

#[test]
fn test_post_normalize_applies_final_yeh() {
    let input = "\u{06A9}\u{0620} \u{06A9}\u{0620}\u{0631}";
    assert_eq!(post_normalize(input), "\u{06A9}\u{06CD} \u{06A9}\u{0620}\u{0631}");
    // The base pipeline never rewrites yeh
    assert_eq!(normalize(input, false), input);
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize("", false), "");
    assert_eq!(normalize("", true), "");
    assert_eq!(post_normalize(""), "");
}

#[test]
fn test_default_normalizer_matches_free_functions() {
    let normalizer = KashmiriNormalizer::new();
    let input = "\u{0643}\u{0620},\u{06F5}";

    assert_eq!(normalizer.language_code(), "ks");
    assert_eq!(LanguageProcessor::normalize(&normalizer, input), normalize(input, false));
    assert_eq!(LanguageProcessor::post_normalize(&normalizer, input), post_normalize(input));
    assert_eq!(normalizer.normalize(input, true), normalize(input, true));
    assert_eq!(
        normalizer.stage_names(),
        vec!["canonicalize", "digits_to_latin", "space_punctuation"]
    );
}

#[test]
fn test_configured_pipeline() {
    let config = NormalizerConfig {
        remove_diacritics: true,
        digit_target: DigitTarget::PersoArabic,
        space_punctuation: false,
        compose_unicode: true,
        ..NormalizerConfig::default()
    };
    let normalizer = KashmiriNormalizer::with_config(config.clone()).unwrap();

    assert_eq!(normalizer.config(), &config);
    assert_eq!(
        normalizer.stage_names(),
        vec!["nfc", "canonicalize", "digits_to_perso_arabic", "strip_diacritics"]
    );
    // Decomposed alef + madda composes, digits go Perso-Arabic, marks vanish,
    // and the full-width comma becomes Arabic with no added space
    assert_eq!(
        normalizer.apply("\u{0627}\u{0653}\u{0628}\u{064E}\u{FF0C}12"),
        "\u{0622}\u{0628}\u{060C}\u{06F1}\u{06F2}"
    );
}

#[test]
fn test_extra_mappings_run_after_builtin_canonicalization() {
    let mut extra = EquivalenceTable::new();
    // Built-in canonicalization turns Arabic kaf into keheh first
    extra.insert("\u{06AF}", ["\u{06A9}\u{06A9}"]);

    let config = NormalizerConfig {
        extra_mappings: extra,
        ..NormalizerConfig::default()
    };
    let normalizer = KashmiriNormalizer::with_config(config).unwrap();

    assert_eq!(normalizer.apply("\u{0643}\u{0643}"), "\u{06AF}");
    assert_eq!(
        normalizer.stage_names(),
        vec!["canonicalize", "replace", "digits_to_latin", "space_punctuation"]
    );
}

#[test]
fn test_conflicting_extra_mappings_are_rejected() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), vec!["x".to_string()]);
    map.insert("b".to_string(), vec!["x".to_string()]);

    let config = NormalizerConfig {
        extra_mappings: EquivalenceTable::from(map),
        ..NormalizerConfig::default()
    };

    match KashmiriNormalizer::with_config(config) {
        Err(NormalizerError::Table(TableError::ConflictingVariant { variant, .. })) => {
            assert_eq!(variant, "x");
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("conflicting mappings were accepted"),
    }
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = KashmiriNormalizer::from_config_file(std::path::Path::new("/nonexistent/ks.json"));
    assert!(matches!(result, Err(NormalizerError::Config(_))));
}
