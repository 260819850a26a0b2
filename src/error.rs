use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for intcalc
///
/// The arithmetic operations themselves are total and never return errors;
/// this type covers the CLI boundary (config, output encoding, argument
/// parsing outside clap).
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Failed to encode output: {0}")]
    OutputEncoding(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
