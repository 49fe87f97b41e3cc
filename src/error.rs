//! Error types for stock metadata conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Which category vocabulary a failed lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    /// The canonical (ShutterStock) category set
    Canonical,

    /// AdobeStock category names
    AdobeStock,
}

impl std::fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Taxonomy::Canonical => write!(f, "canonical"),
            Taxonomy::AdobeStock => write!(f, "AdobeStock"),
        }
    }
}

/// Errors raised by record conversion, CSV rendering and sidecar parsing
#[derive(Debug, Error)]
pub enum StockError {
    #[error("Unknown {taxonomy} category: {category:?}")]
    UnknownCategory { category: String, taxonomy: Taxonomy },

    #[error("{operation} is not supported for {format} records")]
    Unsupported {
        operation: &'static str,
        format: &'static str,
    },

    #[error("Unknown keys in sidecar {}: {}", path.display(), keys.join(", "))]
    UnknownSidecarKeys { path: PathBuf, keys: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StockError {
    pub(crate) fn unknown_category(category: &str, taxonomy: Taxonomy) -> Self {
        StockError::UnknownCategory {
            category: category.to_string(),
            taxonomy,
        }
    }
}

pub type Result<T, E = StockError> = std::result::Result<T, E>;
