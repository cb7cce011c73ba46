use koshur_config::DigitTarget;
use koshur_core::{PatternReplacer, Preprocessor};
use once_cell::sync::Lazy;

use crate::constants::{compile, to_latin_digit_table, to_perso_arabic_digit_table};

static TO_LATIN: Lazy<PatternReplacer> =
    Lazy::new(|| compile("latin digit", &to_latin_digit_table()));

static TO_PERSO_ARABIC: Lazy<PatternReplacer> =
    Lazy::new(|| compile("perso-arabic digit", &to_perso_arabic_digit_table()));

/// Rewrite digits into the `target` script; digits with no mapping pass through
pub fn replace_digits(text: &str, target: DigitTarget) -> String {
    match target {
        DigitTarget::Latin => TO_LATIN.replace(text),
        DigitTarget::PersoArabic => TO_PERSO_ARABIC.replace(text),
    }
}

/// Pipeline stage for [`replace_digits`]
pub struct DigitConverter {
    target: DigitTarget,
}

impl DigitConverter {
    pub fn new(target: DigitTarget) -> Self {
        Self { target }
    }
}

impl Default for DigitConverter {
    fn default() -> Self {
        Self::new(DigitTarget::Latin)
    }
}

impl Preprocessor for DigitConverter {
    fn name(&self) -> &str {
        match self.target {
            DigitTarget::Latin => "digits_to_latin",
            DigitTarget::PersoArabic => "digits_to_perso_arabic",
        }
    }

    fn process(&self, text: &str) -> String {
        replace_digits(text, self.target)
    }
}
