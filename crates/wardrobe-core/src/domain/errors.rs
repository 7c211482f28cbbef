//! Domain error types
//!
//! Validation failures that are reported inline, before any remote call
//! is attempted. Remote-call failures are adapter-level (`anyhow`) and
//! surfaced separately through the store's error channel.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// ID parsing error
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// A required text field was empty or whitespace-only
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// A look was created without any selected items
    #[error("A look needs at least one selected item")]
    EmptySelection,

    /// Referenced record does not exist in the local collection
    #[error("Unknown record: {0}")]
    NotFound(String),

    /// Image MIME type outside the accepted set
    #[error("Unsupported image type: {0} (use JPEG, PNG or WEBP)")]
    UnsupportedImageType(String),

    /// Image exceeds the configured size limit
    #[error("Image too large: {size_bytes} bytes (limit {limit_bytes} bytes)")]
    ImageTooLarge {
        /// Actual file size
        size_bytes: u64,
        /// Configured limit
        limit_bytes: u64,
    },

    /// Import snapshot failed structural validation
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Invalid storage key format
    #[error("Invalid storage key: {0}")]
    InvalidStorageKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::EmptyField("name");
        assert_eq!(err.to_string(), "Field 'name' must not be empty");

        let err = DomainError::ImageTooLarge {
            size_bytes: 6_291_456,
            limit_bytes: 5_242_880,
        };
        assert!(err.to_string().contains("6291456"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = DomainError::InvalidSnapshot("items".to_string());
        let err2 = DomainError::InvalidSnapshot("items".to_string());
        assert_eq!(err1, err2);
        assert_ne!(err1, DomainError::EmptySelection);
    }
}
