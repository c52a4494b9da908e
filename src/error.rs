//! Error types for the contact and lead stores.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by a document collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No document matched the selector
    #[error("No document matched the selector")]
    NotFound,

    /// A document with this id is already stored
    #[error("Duplicate document id: {0}")]
    DuplicateId(String),

    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding a document failed
    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored data is not a valid document
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Collections were requested with an unusable configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors returned by [`ContactStore`](crate::repositories::ContactStore) operations.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Person or email failed validation
    #[error("Invalid contact: {0}")]
    Validation(#[from] ValidationError),

    /// No contact matched the id or slug
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Every slug candidate derived from this base was taken
    #[error("No free slug could be derived from '{0}'")]
    SlugUnavailable(String),

    /// Underlying collection failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors returned by [`LeadStore`](crate::repositories::LeadStore) operations.
#[derive(Error, Debug)]
pub enum LeadError {
    /// A lead field failed validation
    #[error("Invalid lead: {0}")]
    Validation(#[from] ValidationError),

    /// No lead matched the id
    #[error("Lead not found: {0}")]
    NotFound(String),

    /// Underlying collection failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<LeadError> for ContactError {
    fn from(err: LeadError) -> Self {
        match err {
            LeadError::Validation(e) => ContactError::Validation(e),
            LeadError::NotFound(id) => ContactError::NotFound(id),
            LeadError::Store(e) => ContactError::Store(e),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with LeadError
pub type LeadResult<T> = Result<T, LeadError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::NotFound("sam-flynn".to_string());
        assert_eq!(err.to_string(), "Contact not found: sam-flynn");

        let err = ConfigError::InvalidValue {
            var: "CUREM_DATA_DIR".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for CUREM_DATA_DIR: Cannot be empty");

        let err = StoreError::DuplicateId("abc".to_string());
        assert_eq!(err.to_string(), "Duplicate document id: abc");
    }

    #[test]
    fn test_validation_error_wraps() {
        let err: ContactError = ValidationError::EmptyPerson.into();
        assert!(matches!(err, ContactError::Validation(ValidationError::EmptyPerson)));
        assert_eq!(err.to_string(), "Invalid contact: Person cannot be empty");
    }

    #[test]
    fn test_lead_store_error_keeps_its_kind() {
        let err: ContactError = LeadError::Store(StoreError::NotFound).into();
        assert!(matches!(err, ContactError::Store(StoreError::NotFound)));
    }

    #[test]
    fn test_store_error_passes_through() {
        let err: ContactError = StoreError::NotFound.into();
        assert_eq!(err.to_string(), StoreError::NotFound.to_string());
    }
}
