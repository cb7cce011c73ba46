use std::path::Path;

use koshur_core::EquivalenceTable;
use serde::{Deserialize, Serialize};

pub use self::digits::DigitTarget;

pub mod digits;

fn default_remove_diacritics() -> bool {
    false
}

fn default_space_punctuation() -> bool {
    true
}

fn default_compose_unicode() -> bool {
    false
}

/// Options for the configurable normalization pipeline
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NormalizerConfig {
    #[serde(default = "default_remove_diacritics")]
    pub remove_diacritics: bool,
    #[serde(default)]
    pub digit_target: DigitTarget,
    #[serde(default = "default_space_punctuation")]
    pub space_punctuation: bool,
    /// NFC-compose input before canonicalization
    #[serde(default = "default_compose_unicode")]
    pub compose_unicode: bool,
    /// User mappings applied after the built-in canonicalization
    #[serde(default)]
    pub extra_mappings: EquivalenceTable,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            remove_diacritics: default_remove_diacritics(),
            digit_target: DigitTarget::default(),
            space_punctuation: default_space_punctuation(),
            compose_unicode: default_compose_unicode(),
            extra_mappings: EquivalenceTable::new(),
        }
    }
}

impl NormalizerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading normalizer config from: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load config from `path`, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            tracing::warn!("Using default normalizer config");
            Self::default()
        })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_match_base_pipeline() {
        let config = NormalizerConfig::default();
        assert!(!config.remove_diacritics);
        assert_eq!(config.digit_target, DigitTarget::Latin);
        assert!(config.space_punctuation);
        assert!(!config.compose_unicode);
        assert!(config.extra_mappings.is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = NormalizerConfig::from_json(r#"{"remove_diacritics": true}"#).unwrap();
        assert!(config.remove_diacritics);
        assert!(config.space_punctuation);
        assert_eq!(config.digit_target, DigitTarget::Latin);
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "remove_diacritics": false,
            "digit_target": "perso_arabic",
            "space_punctuation": false,
            "compose_unicode": true,
            "extra_mappings": {"ۆ": ["ۏ"]}
        }"#;
        let config = NormalizerConfig::from_json(json).unwrap();

        assert_eq!(config.digit_target, DigitTarget::PersoArabic);
        assert!(!config.space_punctuation);
        assert!(config.compose_unicode);
        assert_eq!(config.extra_mappings.flatten()["ۏ"], "ۆ");
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let config = NormalizerConfig {
            digit_target: DigitTarget::PersoArabic,
            ..NormalizerConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(NormalizerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_digit_target_name_matches_serialized_form() {
        for target in [DigitTarget::Latin, DigitTarget::PersoArabic] {
            let json = serde_json::to_string(&target).unwrap();
            assert_eq!(json, format!("\"{}\"", target.as_str()));
        }
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = NormalizerConfig::from_json(r#"{"digit_target": "roman"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"remove_diacritics": true}}"#).unwrap();

        let config = NormalizerConfig::load_from_file(file.path()).unwrap();
        assert!(config.remove_diacritics);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = NormalizerConfig::load_or_default(Path::new("/nonexistent/koshur.json"));
        assert_eq!(config, NormalizerConfig::default());
    }
}
