use koshur_config::ConfigError;
use koshur_core::TableError;

#[derive(Debug, thiserror::Error)]
pub enum NormalizerError {
    #[error("Invalid mapping table: {0}")]
    Table(#[from] TableError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
