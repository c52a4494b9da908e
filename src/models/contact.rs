//! Contact model representing a person tracked by the CRM.

use crate::domain::{EmailAddress, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// A persisted contact.
///
/// Stored as `{id, company, person, email, phone?, slug, country}`. The slug
/// is unique across all contacts and is the key leads use to reference a
/// contact, so it is treated as immutable once assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Identifier assigned on insert
    pub id: RecordId,

    /// Organization the person belongs to
    #[serde(default)]
    pub company: String,

    /// Full name; required
    pub person: String,

    /// Email address; required and validated
    pub email: String,

    /// Phone number, absent when not supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Unique, URL-safe alternate key
    pub slug: String,

    #[serde(default)]
    pub country: String,
}

impl Contact {
    /// Check the fields every stored contact must satisfy.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyPerson` if `person` is blank
    /// - `ValidationError::EmptyEmail` / `InvalidEmail` if `email` is missing or malformed
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_person_and_email(&self.person, &self.email)
    }
}

pub(crate) fn validate_person_and_email(person: &str, email: &str) -> Result<(), ValidationError> {
    if person.trim().is_empty() {
        return Err(ValidationError::EmptyPerson);
    }
    EmailAddress::new(email)?;
    Ok(())
}

/// Input for creating a contact.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub company: String,
    pub person: String,
    pub email: String,
    /// Empty strings are treated as no phone.
    pub phone: Option<String>,
    /// Preferred slug; normalized, and used only if no other contact holds it.
    pub slug: Option<String>,
    pub country: String,
}

impl NewContact {
    /// Start a draft with the two required fields.
    pub fn new(person: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Validate the draft without touching any store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_person_and_email(&self.person, &self.email)
    }

    /// Build the contact once an id and slug have been settled.
    pub(crate) fn into_contact(self, id: RecordId, slug: String) -> Contact {
        Contact {
            id,
            company: self.company,
            person: self.person,
            email: self.email,
            phone: self.phone.filter(|p| !p.trim().is_empty()),
            slug,
            country: self.country,
        }
    }
}
