//! Theme error types

use std::io;
use thiserror::Error;

/// Errors that can occur when loading or saving a theme
#[derive(Error, Debug)]
pub enum ThemeError {
    /// IO error when reading or writing the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("theme parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("theme serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
