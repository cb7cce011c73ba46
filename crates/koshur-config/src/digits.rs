use serde::{Deserialize, Serialize};

/// Which digit script numbers are rewritten into
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DigitTarget {
    /// ASCII 0-9
    #[default]
    Latin,
    /// Extended Arabic-Indic digits (۰-۹)
    PersoArabic,
}

impl DigitTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigitTarget::Latin => "latin",
            DigitTarget::PersoArabic => "perso_arabic",
        }
    }
}
