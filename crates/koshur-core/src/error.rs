/// Defects in an equivalence table or a pattern built from one
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Empty variant listed under canonical form {canonical:?}")]
    EmptyVariant { canonical: String },

    #[error("Variant {variant:?} is listed under both {first:?} and {second:?}")]
    ConflictingVariant {
        variant: String,
        first: String,
        second: String,
    },

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
