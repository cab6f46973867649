//! Error types for registry snapshot loading

use std::path::PathBuf;

use thiserror::Error;

use crate::RegistryIndex;

/// Error type for registry snapshot operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Snapshot file could not be read
    #[error("Failed to read registry snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot is not valid JSON or does not match the descriptor schema
    #[error("Malformed registry snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Two descriptors claim the same registry index
    #[error("Duplicate registry index {index}: '{first}' and '{second}'")]
    DuplicateIndex {
        index: RegistryIndex,
        first: String,
        second: String,
    },
}

/// Result type alias for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_index_display() {
        let err = RegistryError::DuplicateIndex {
            index: RegistryIndex(7),
            first: "ENetRole".to_string(),
            second: "ECollisionChannel".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate registry index #7: 'ENetRole' and 'ECollisionChannel'"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RegistryError = json_err.into();
        assert!(matches!(err, RegistryError::Json(_)));
    }
}
