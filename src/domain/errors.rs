//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is not a valid record id.
    InvalidId(String),

    /// The contact's person name is empty.
    EmptyPerson,

    /// The contact's email address is empty.
    EmptyEmail,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// An update tried to change a contact's slug.
    SlugChanged { stored: String, requested: String },

    /// The lead does not reference a contact slug.
    EmptyContactSlug,

    /// A lead field holds an unusable value.
    InvalidLeadField { field: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Invalid record id: {}", id),
            Self::EmptyPerson => write!(f, "Person cannot be empty"),
            Self::EmptyEmail => write!(f, "Email cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::SlugChanged { stored, requested } => write!(
                f,
                "Slug cannot change after creation ('{}' -> '{}')",
                stored, requested
            ),
            Self::EmptyContactSlug => write!(f, "Lead must reference a contact slug"),
            Self::InvalidLeadField { field, reason } => {
                write!(f, "Invalid value for {}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
