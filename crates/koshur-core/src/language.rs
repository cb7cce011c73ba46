/// Normalization interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code where one exists: "ks", "ur", ...)
    fn language_code(&self) -> &str;

    /// Canonicalize text for downstream ML pre-processing
    fn normalize(&self, text: &str) -> String;

    /// Normalize text that is about to be rendered or read, applying the full
    /// orthographic rules of the language
    fn post_normalize(&self, text: &str) -> String {
        self.normalize(text)
    }
}
