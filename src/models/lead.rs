//! Lead model: a sales opportunity attached to a contact.

use crate::domain::{RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// A persisted lead.
///
/// Leads point at their contact through `contact_slug`, not the contact id.
/// Renaming a contact's slug would orphan its leads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    /// Identifier assigned on insert
    pub id: RecordId,

    /// Slug of the contact this lead belongs to
    pub contact_slug: String,

    /// Where the lead came from (e.g. "Web", "Referral")
    #[serde(default)]
    pub source: String,

    /// Person responsible for the lead
    #[serde(default)]
    pub owner: String,

    /// Pipeline status (e.g. "Warming Up", "Won")
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub team_size: f64,

    #[serde(default)]
    pub rate_per_hour: f64,

    #[serde(default)]
    pub duration_in_months: f64,

    /// Free-form expected start, e.g. "3rd July, 2014"
    #[serde(default)]
    pub estimated_start_date: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Input for creating a lead.
#[derive(Debug, Clone, Default)]
pub struct NewLead {
    pub contact_slug: String,
    pub source: String,
    pub owner: String,
    pub status: String,
    pub team_size: f64,
    pub rate_per_hour: f64,
    pub duration_in_months: f64,
    pub estimated_start_date: String,
    pub comments: Vec<String>,
}

impl NewLead {
    /// Start a draft for the contact with the given slug.
    pub fn for_contact(contact_slug: impl Into<String>) -> Self {
        Self {
            contact_slug: contact_slug.into(),
            ..Default::default()
        }
    }

    /// Validate the draft.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyContactSlug` if no contact is referenced
    /// - `ValidationError::InvalidLeadField` if a numeric field is negative or not finite
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.contact_slug.trim().is_empty() {
            return Err(ValidationError::EmptyContactSlug);
        }

        let numbers = [
            ("team_size", self.team_size),
            ("rate_per_hour", self.rate_per_hour),
            ("duration_in_months", self.duration_in_months),
        ];
        for (field, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidLeadField {
                    field,
                    reason: format!("must be a non-negative number, got {}", value),
                });
            }
        }

        Ok(())
    }

    pub(crate) fn into_lead(self, id: RecordId) -> Lead {
        Lead {
            id,
            contact_slug: self.contact_slug,
            source: self.source,
            owner: self.owner,
            status: self.status,
            team_size: self.team_size,
            rate_per_hour: self.rate_per_hour,
            duration_in_months: self.duration_in_months,
            estimated_start_date: self.estimated_start_date,
            comments: self.comments,
        }
    }
}
