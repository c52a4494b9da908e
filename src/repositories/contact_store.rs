use super::{decode, encode};
use crate::collection::{Collection, Filter};
use super::LeadStore;
use crate::domain::{base_slug, slugify, with_random_suffix, RecordId, ValidationError};
use crate::error::{ContactError, ContactResult, StoreError};
use crate::models::{Contact, Lead, NewContact};
use std::sync::Arc;
use tracing::{debug, info, warn};

const SLUG_FIELD: &str = "slug";

/// Random suffixes tried before giving up on a colliding slug.
const MAX_SLUG_ATTEMPTS: usize = 32;

/// Validates, slugifies and persists contacts.
///
/// Also resolves the leads that reference a contact by slug. Checking a slug
/// and inserting the contact are two separate collection calls, so two
/// concurrent creates deriving the same slug can still collide; callers are
/// expected to serialize writes.
#[derive(Clone)]
pub struct ContactStore {
    contacts: Arc<dyn Collection>,
    leads: LeadStore,
}

impl ContactStore {
    /// Create a store over the given contacts and leads collections.
    pub fn new(contacts: Arc<dyn Collection>, leads: Arc<dyn Collection>) -> Self {
        Self {
            contacts,
            leads: LeadStore::new(leads),
        }
    }

    /// Validate and persist a new contact.
    ///
    /// The slug is the normalized `draft.slug` hint when that is free,
    /// otherwise it is derived from the person name and disambiguated with a
    /// random suffix. Nothing is written if validation fails.
    pub async fn create(&self, draft: NewContact) -> ContactResult<Contact> {
        draft.validate()?;

        let slug = self.resolve_slug(&draft).await?;
        let contact = draft.into_contact(RecordId::generate(), slug);
        self.contacts.insert(encode(&contact)?).await?;

        info!(id = %contact.id, slug = %contact.slug, "Contact created");
        Ok(contact)
    }

    async fn resolve_slug(&self, draft: &NewContact) -> ContactResult<String> {
        if let Some(hint) = draft.slug.as_deref() {
            let hint = slugify(hint);
            if !hint.is_empty() && !self.slug_exists(&hint).await? {
                return Ok(hint);
            }
            debug!(hint = %hint, "Slug hint unavailable, deriving from person");
        }

        let base = base_slug(&draft.person);
        if !self.slug_exists(&base).await? {
            return Ok(base);
        }

        warn!(slug = %base, "Slug already taken, adding suffix");
        for _ in 0..MAX_SLUG_ATTEMPTS {
            let candidate = with_random_suffix(&base);
            if !self.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(ContactError::SlugUnavailable(base))
    }

    /// Whether any stored contact already uses `slug`.
    pub async fn slug_exists(&self, slug: &str) -> ContactResult<bool> {
        let filter = Filter::new().where_eq(SLUG_FIELD, slug);
        Ok(self.contacts.find_one(&filter).await?.is_some())
    }

    /// Fetch a contact by id.
    ///
    /// A malformed id is reported as `NotFound`, the same as an unknown one.
    pub async fn get_by_id(&self, id: &str) -> ContactResult<Contact> {
        let record_id =
            RecordId::parse(id).map_err(|_| ContactError::NotFound(id.to_string()))?;
        debug!(id = %record_id, "Fetching contact by id");

        match self.contacts.find_one(&Filter::by_id(&record_id)).await? {
            Some(document) => Ok(decode(document)?),
            None => Err(ContactError::NotFound(id.to_string())),
        }
    }

    /// Fetch a contact by slug.
    pub async fn get_by_slug(&self, slug: &str) -> ContactResult<Contact> {
        debug!(slug = %slug, "Fetching contact by slug");

        let filter = Filter::new().where_eq(SLUG_FIELD, slug);
        match self.contacts.find_one(&filter).await? {
            Some(document) => Ok(decode(document)?),
            None => Err(ContactError::NotFound(slug.to_string())),
        }
    }

    /// Every stored contact, in no particular order.
    pub async fn get_all(&self) -> ContactResult<Vec<Contact>> {
        let documents = self.contacts.find(&Filter::new()).await?;
        documents
            .into_iter()
            .map(|document| decode(document).map_err(ContactError::from))
            .collect()
    }

    /// Number of stored contacts.
    pub async fn count(&self) -> ContactResult<usize> {
        Ok(self.contacts.count().await?)
    }

    /// Replace the stored record with `contact`.
    ///
    /// Person and email are revalidated. The slug is immutable after create:
    /// a record whose slug differs from the stored one is rejected with
    /// `ValidationError::SlugChanged` and nothing is written.
    pub async fn update(&self, contact: &Contact) -> ContactResult<()> {
        contact.validate()?;

        let filter = Filter::by_id(&contact.id);
        let stored: Contact = match self.contacts.find_one(&filter).await? {
            Some(document) => decode(document)?,
            None => return Err(ContactError::NotFound(contact.id.to_string())),
        };
        if stored.slug != contact.slug {
            return Err(ValidationError::SlugChanged {
                stored: stored.slug,
                requested: contact.slug.clone(),
            }
            .into());
        }

        self.contacts
            .update(&filter, encode(contact)?)
            .await
            .map_err(|e| not_found_as(e, &contact.id))?;

        info!(id = %contact.id, "Contact updated");
        Ok(())
    }

    /// Hard-delete a contact.
    ///
    /// Deleting a contact that is no longer stored returns `NotFound`.
    /// Leads referencing its slug are left in place.
    pub async fn delete(&self, contact: &Contact) -> ContactResult<()> {
        self.contacts
            .remove(&Filter::by_id(&contact.id))
            .await
            .map_err(|e| not_found_as(e, &contact.id))?;

        info!(id = %contact.id, slug = %contact.slug, "Contact deleted");
        Ok(())
    }

    /// Leads whose `contact_slug` equals the contact's current slug.
    pub async fn leads(&self, contact: &Contact) -> ContactResult<Vec<Lead>> {
        let leads = self.leads.for_contact_slug(&contact.slug).await?;
        debug!(slug = %contact.slug, leads = leads.len(), "Resolved contact leads");
        Ok(leads)
    }
}

fn not_found_as(err: StoreError, id: &RecordId) -> ContactError {
    match err {
        StoreError::NotFound => ContactError::NotFound(id.to_string()),
        other => ContactError::Store(other),
    }
}
