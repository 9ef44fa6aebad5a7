//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Record not found (already deleted or never existed)
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// A record with the same identity already exists
    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    /// Proxy line could not be interpreted
    #[error("Invalid proxy: {0}")]
    InvalidProxy(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// network error
    #[error("Network error: {0}")]
    NetworkError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RecordNotFound(_) | Self::DuplicateRecord(_) | Self::InvalidProxy(_) => true,
            Self::StorageError(_) | Self::NetworkError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_errors_are_expected() {
        assert!(CoreError::RecordNotFound("acc:1".to_string()).is_expected());
        assert!(CoreError::InvalidProxy("nope".to_string()).is_expected());
        assert!(!CoreError::StorageError("disk full".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::DuplicateRecord("1.2.3.4:80".to_string())).unwrap();
        assert_eq!(json["code"], "DuplicateRecord");
        assert_eq!(json["details"], "1.2.3.4:80");
    }
}
