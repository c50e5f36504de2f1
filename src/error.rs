//! Error handling for Cuebank
//!
//! All errors carry enough context (paths, names, IDs) to report exactly
//! which binding or file an operation tripped over.

use std::path::PathBuf;

use thiserror::Error;

use crate::hash::{PlayingId, SoundId};
use crate::manifest::Category;

/// Result type alias for Cuebank operations
pub type Result<T> = std::result::Result<T, CuebankError>;

/// Main error type for Cuebank operations
#[derive(Error, Debug)]
pub enum CuebankError {
    // File Errors
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Manifest Errors
    #[error("Unsupported manifest schema version {found} (current is {current})")]
    UnsupportedSchema { found: u32, current: u32 },

    #[error("Manifest failed validation: {} violation(s)", violations.len())]
    InvalidManifest {
        violations: Vec<crate::manifest::Violation>,
    },

    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    // Resolution Errors
    #[error("No {category} binding with ID {id} (stale or never exported)")]
    UnknownId { category: Category, id: SoundId },

    #[error("No {category} binding named {name:?}")]
    UnknownName { category: Category, name: String },

    // Engine Errors
    #[error("Bank {bank} is not loaded")]
    BankNotLoaded { bank: SoundId },

    #[error("No active instance with playing ID {playing}")]
    InstanceNotFound { playing: PlayingId },

    // Codegen Errors
    #[error("Bindings {first:?} and {second:?} both map to constant {constant}")]
    ConstantCollision {
        first: String,
        second: String,
        constant: String,
    },

    #[error("Generated artifact {path} is stale (on disk {actual_digest}, regenerated {expected_digest})")]
    ArtifactStale {
        path: PathBuf,
        expected_digest: String,
        actual_digest: String,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CuebankError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            CuebankError::FileRead { .. } => "FILE_READ",
            CuebankError::FileWrite { .. } => "FILE_WRITE",
            CuebankError::UnsupportedSchema { .. } => "UNSUPPORTED_SCHEMA",
            CuebankError::InvalidManifest { .. } => "INVALID_MANIFEST",
            CuebankError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            CuebankError::UnknownId { .. } => "UNKNOWN_ID",
            CuebankError::UnknownName { .. } => "UNKNOWN_NAME",
            CuebankError::BankNotLoaded { .. } => "BANK_NOT_LOADED",
            CuebankError::InstanceNotFound { .. } => "INSTANCE_NOT_FOUND",
            CuebankError::ConstantCollision { .. } => "CONSTANT_COLLISION",
            CuebankError::ArtifactStale { .. } => "ARTIFACT_STALE",
            CuebankError::Io(_) => "IO_ERROR",
            CuebankError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error points at authoring data rather than the local
    /// environment (and is therefore fixed by re-exporting, not retrying)
    pub fn is_authoring_error(&self) -> bool {
        matches!(
            self,
            CuebankError::InvalidManifest { .. }
                | CuebankError::UnknownId { .. }
                | CuebankError::UnknownName { .. }
                | CuebankError::ConstantCollision { .. }
                | CuebankError::ArtifactStale { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = CuebankError::UnknownId {
            category: Category::Events,
            id: SoundId(42),
        };
        assert_eq!(err.error_code(), "UNKNOWN_ID");
        assert!(err.is_authoring_error());
    }

    #[test]
    fn test_environment_errors_are_not_authoring_errors() {
        let err = CuebankError::FileRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.error_code(), "FILE_READ");
        assert!(!err.is_authoring_error());
    }

    #[test]
    fn test_stale_id_message_names_the_category() {
        let err = CuebankError::UnknownId {
            category: Category::Banks,
            id: SoundId(1355168291),
        };
        let msg = err.to_string();
        assert!(msg.contains("Banks"));
        assert!(msg.contains("1355168291"));
    }
}
