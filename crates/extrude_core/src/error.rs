//! Error types shared across Extrude crates

use thiserror::Error;

/// Errors surfaced by Extrude components
///
/// Resolvers never fail: unrecognized options degrade to defaults. These
/// errors cover inputs that cannot be substituted silently and assets that
/// fail to load.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtrudeError {
    /// A color string that is neither hex nor a known keyword
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Image, model or font failed to load
    #[error("failed to load {kind} from {src}: {reason}")]
    AssetLoad {
        kind: String,
        src: String,
        reason: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl ExtrudeError {
    /// Build an asset load error
    pub fn asset_load(
        kind: impl Into<String>,
        src: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ExtrudeError::AssetLoad {
            kind: kind.into(),
            src: src.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for Extrude operations
pub type Result<T> = std::result::Result<T, ExtrudeError>;
