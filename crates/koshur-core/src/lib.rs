pub mod error;
pub mod language;
pub mod preprocess;
pub mod replace;
pub mod spacing;
pub mod table;

pub use error::TableError;
pub use language::LanguageProcessor;
pub use preprocess::{Pipeline, Preprocessor, UnicodeComposition};
pub use replace::PatternReplacer;
pub use spacing::PunctuationSpacer;
pub use table::EquivalenceTable;
