use regex::Regex;

use crate::error::TableError;
use crate::preprocess::Preprocessor;

/// Enforces one space after punctuation and none before it.
///
/// A space is inserted after a punctuation mark unless the next character is
/// punctuation, an ASCII digit, whitespace, or the end of the text. Any run of
/// whitespace directly before a punctuation mark is removed.
#[derive(Debug, Clone)]
pub struct PunctuationSpacer {
    space_after: Option<Regex>,
    space_before: Option<Regex>,
}

impl PunctuationSpacer {
    pub fn new(punctuation: &[char]) -> Result<Self, TableError> {
        if punctuation.is_empty() {
            return Ok(Self {
                space_after: None,
                space_before: None,
            });
        }

        let class = character_class(punctuation);

        // The follower is never punctuation, so consecutive matches can't overlap
        // and a single replace_all pass sees every mark.
        let space_after = Regex::new(&format!("([{class}])([^{class}0-9\\s])"))?;
        let space_before = Regex::new(&format!("\\s+([{class}])"))?;

        Ok(Self {
            space_after: Some(space_after),
            space_before: Some(space_before),
        })
    }

    pub fn apply(&self, text: &str) -> String {
        let (Some(after), Some(before)) = (&self.space_after, &self.space_before) else {
            return text.to_string();
        };

        let spaced = after.replace_all(text, "$1 $2");
        before.replace_all(&spaced, "$1").into_owned()
    }
}

impl Preprocessor for PunctuationSpacer {
    fn name(&self) -> &str {
        "space_punctuation"
    }

    fn process(&self, text: &str) -> String {
        self.apply(text)
    }
}

/// Escape each glyph for use inside `[...]`
fn character_class(chars: &[char]) -> String {
    let mut buf = [0u8; 4];
    chars
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut buf)))
        .collect()
}
