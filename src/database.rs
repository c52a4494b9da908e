//! Collection wiring.
//!
//! Opens the contacts and leads collections described by a [`Config`] and
//! hands them to the stores.

use crate::collection::{Collection, JsonFileCollection, MemoryCollection};
use crate::config::Config;
use crate::error::StoreResult;
use crate::repositories::{ContactStore, LeadStore};
use std::sync::Arc;
use tracing::info;

/// The pair of collections the stores operate on.
#[derive(Clone)]
pub struct Database {
    contacts: Arc<dyn Collection>,
    leads: Arc<dyn Collection>,
}

impl Database {
    /// Open collections as configured.
    ///
    /// The configuration is validated first, so two collections never share
    /// a backing file and names cannot escape `data_dir`. With `data_dir`
    /// set, the directory is created if needed and each collection lives in
    /// `<data_dir>/<name>.json`. Otherwise both collections are in memory.
    pub async fn open(config: &Config) -> StoreResult<Self> {
        config.validate()?;

        let Some(dir) = config.data_dir.as_ref() else {
            info!("Using in-memory collections");
            return Ok(Self::in_memory(config));
        };

        tokio::fs::create_dir_all(dir).await?;
        let contacts = JsonFileCollection::open(dir, config.contacts_collection.as_str()).await?;
        let leads = JsonFileCollection::open(dir, config.leads_collection.as_str()).await?;
        info!(data_dir = %dir.display(), "Using file-backed collections");

        Ok(Self::new(Arc::new(contacts), Arc::new(leads)))
    }

    /// In-memory collections named as configured.
    pub fn in_memory(config: &Config) -> Self {
        Self::new(
            Arc::new(MemoryCollection::new(config.contacts_collection.as_str())),
            Arc::new(MemoryCollection::new(config.leads_collection.as_str())),
        )
    }

    /// Wrap existing collection handles.
    pub fn new(contacts: Arc<dyn Collection>, leads: Arc<dyn Collection>) -> Self {
        Self { contacts, leads }
    }

    pub fn contacts(&self) -> &Arc<dyn Collection> {
        &self.contacts
    }

    pub fn leads(&self) -> &Arc<dyn Collection> {
        &self.leads
    }

    /// A contact store sharing these collections.
    pub fn contact_store(&self) -> ContactStore {
        ContactStore::new(self.contacts.clone(), self.leads.clone())
    }

    /// A lead store sharing the leads collection.
    pub fn lead_store(&self) -> LeadStore {
        LeadStore::new(self.leads.clone())
    }

    /// Empty both collections.
    pub async fn clear(&self) -> StoreResult<()> {
        self.contacts.clear().await?;
        self.leads.clear().await
    }
}
