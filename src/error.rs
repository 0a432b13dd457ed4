//! Error types for adc-matrix
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for adc-matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Main error type for adc-matrix operations
#[derive(Error, Debug)]
pub enum MatrixError {
    /// Sample size exceeds the input domain
    #[error("sample size {sample_size} exceeds domain size {domain_size}")]
    SampleSize {
        sample_size: u32,
        domain_size: u32,
    },

    /// Template does not carry exactly one injected-value placeholder
    #[error("template contains {count} '{{{{value}}}}' placeholders, expected exactly one")]
    PlaceholderCount { count: usize },

    /// A template field was never substituted
    #[error("unresolved template field '{{{{{name}}}}}' in rendered scenario")]
    UnresolvedField { name: String },

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Config file failed to parse as TOML
    #[error("failed to parse config file {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Input domain does not start at zero
    #[error("input domain must start at 0, got {start}")]
    DomainStart { start: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
