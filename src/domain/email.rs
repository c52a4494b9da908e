//! EmailAddress value object.

use super::errors::ValidationError;
use std::fmt;

/// A validated email address.
///
/// Only the structure `local@domain.tld` is checked; deliverability is not.
///
/// # Example
///
/// ```
/// use curem::domain::EmailAddress;
///
/// let email = EmailAddress::new("flynn@encom.com").unwrap();
/// assert_eq!(email.as_str(), "flynn@encom.com");
/// assert!(EmailAddress::new("x@.xyzc.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain exactly one '@' symbol
    /// - Must have a local part before '@'
    /// - Must have a domain part after '@' with at least one '.'
    /// - No label of the domain may be empty
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEmail` for an empty string and
    /// `ValidationError::InvalidEmail` for any other malformed address.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    fn is_valid(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        if !domain.contains('.') {
            return false;
        }

        domain.split('.').all(|label| !label.is_empty())
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
