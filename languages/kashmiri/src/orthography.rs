use koshur_core::Preprocessor;
use once_cell::sync::Lazy;
use regex::Regex;

/// Kashmiri yeh (ؠ)
pub const KASHMIRI_YEH: char = '\u{0620}';
/// Yeh with tail (ۍ), required where a word starts or ends with ؠ
pub const YEH_WITH_TAIL: char = '\u{06CD}';

static YEH_AT_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    let mut buf = [0u8; 4];
    let yeh = regex::escape(KASHMIRI_YEH.encode_utf8(&mut buf));
    Regex::new(&format!(r"\b{yeh}|{yeh}\b"))
        .unwrap_or_else(|e| panic!("final-position pattern failed to compile: {e}"))
});

/// Replace ؠ with ۍ wherever it touches a word boundary; mid-word ؠ is kept
pub fn apply_final_position_rule(text: &str) -> String {
    let mut buf = [0u8; 4];
    let tail: &str = YEH_WITH_TAIL.encode_utf8(&mut buf);
    YEH_AT_BOUNDARY
        .replace_all(text, regex::NoExpand(tail))
        .into_owned()
}

/// Pipeline stage for [`apply_final_position_rule`]
pub struct FinalPositionRule;

impl Preprocessor for FinalPositionRule {
    fn name(&self) -> &str {
        "final_position_yeh"
    }

    fn process(&self, text: &str) -> String {
        apply_final_position_rule(text)
    }
}
