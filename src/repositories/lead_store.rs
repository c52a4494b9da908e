use super::{decode, encode};
use crate::collection::{Collection, Filter};
use crate::domain::RecordId;
use crate::error::{LeadError, LeadResult};
use crate::models::{Lead, NewLead};
use std::sync::Arc;
use tracing::{debug, info};

/// Field joining a lead to its contact.
const CONTACT_SLUG_FIELD: &str = "contact_slug";

/// Persists leads.
///
/// The referenced contact slug is stored as given; it is not checked
/// against the contacts collection.
#[derive(Clone)]
pub struct LeadStore {
    leads: Arc<dyn Collection>,
}

impl LeadStore {
    /// Create a store over the given leads collection.
    pub fn new(leads: Arc<dyn Collection>) -> Self {
        Self { leads }
    }

    /// Validate and persist a new lead.
    pub async fn create(&self, draft: NewLead) -> LeadResult<Lead> {
        draft.validate()?;

        let lead = draft.into_lead(RecordId::generate());
        self.leads.insert(encode(&lead)?).await?;

        info!(id = %lead.id, contact_slug = %lead.contact_slug, "Lead created");
        Ok(lead)
    }

    /// Fetch a lead by id; malformed ids are `NotFound`.
    pub async fn get_by_id(&self, id: &str) -> LeadResult<Lead> {
        let record_id = RecordId::parse(id).map_err(|_| LeadError::NotFound(id.to_string()))?;

        match self.leads.find_one(&Filter::by_id(&record_id)).await? {
            Some(document) => Ok(decode(document)?),
            None => Err(LeadError::NotFound(id.to_string())),
        }
    }

    /// Leads referencing the given contact slug.
    pub async fn for_contact_slug(&self, slug: &str) -> LeadResult<Vec<Lead>> {
        debug!(slug = %slug, "Fetching leads for contact");
        let filter = Filter::new().where_eq(CONTACT_SLUG_FIELD, slug);
        self.decode_all(&filter).await
    }

    /// Every stored lead, in no particular order.
    pub async fn get_all(&self) -> LeadResult<Vec<Lead>> {
        self.decode_all(&Filter::new()).await
    }

    /// Number of stored leads.
    pub async fn count(&self) -> LeadResult<usize> {
        Ok(self.leads.count().await?)
    }

    async fn decode_all(&self, filter: &Filter) -> LeadResult<Vec<Lead>> {
        self.leads
            .find(filter)
            .await?
            .into_iter()
            .map(|document| decode(document).map_err(LeadError::from))
            .collect()
    }
}
