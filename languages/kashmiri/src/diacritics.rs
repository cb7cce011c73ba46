use koshur_core::{PatternReplacer, Preprocessor};
use once_cell::sync::Lazy;

use crate::constants::{compile, diacritic_table, KASHMIRI_DIACRITICS};

static DIACRITICS: Lazy<PatternReplacer> = Lazy::new(|| compile("diacritic", &diacritic_table()));

/// Delete every Kashmiri diacritic, leaving base letters alone
pub fn strip_diacritics(text: &str) -> String {
    DIACRITICS.replace(text)
}

pub fn is_diacritic(c: char) -> bool {
    KASHMIRI_DIACRITICS.contains(&c)
}

/// Pipeline stage for [`strip_diacritics`]
pub struct DiacriticStripper;

impl Preprocessor for DiacriticStripper {
    fn name(&self) -> &str {
        "strip_diacritics"
    }

    fn process(&self, text: &str) -> String {
        strip_diacritics(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_vowel_marks() {
        assert_eq!(
            strip_diacritics("\u{06A9}\u{064E}\u{0634}\u{06CC}\u{0656}\u{0631}"),
            "\u{06A9}\u{0634}\u{06CC}\u{0631}"
        );
        assert_eq!(
            strip_diacritics("\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650}"),
            "\u{0628}\u{0633}\u{0645}"
        );
    }

    #[test]
    fn test_kashmiri_vowel_signs() {
        // Small v above and wavy hamza below are diacritics too
        assert_eq!(strip_diacritics("\u{0698}\u{065A}\u{0631}\u{065F}"), "\u{0698}\u{0631}");
    }

    #[test]
    fn test_precomposed_letters_are_kept() {
        // Alef with wavy hamza above is a letter, not base + mark
        let word = "\u{06A9}\u{0672}\u{0634}\u{0631}";
        assert_eq!(strip_diacritics(word), word);
        assert_eq!(strip_diacritics("Hello"), "Hello");
        assert!(!is_diacritic('\u{0672}'));
        assert!(is_diacritic('\u{0650}'));
    }
}
