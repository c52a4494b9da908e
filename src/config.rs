//! Configuration management.
//!
//! Configuration is read from environment variables, with an optional `.env`
//! file loaded first.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default name of the contacts collection.
pub const DEFAULT_CONTACTS_COLLECTION: &str = "contacts";

/// Default name of the leads collection.
pub const DEFAULT_LEADS_COLLECTION: &str = "leads";

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one JSON file per collection.
    /// `None` keeps every collection in memory.
    pub data_dir: Option<PathBuf>,

    /// Contacts collection name (default: "contacts")
    pub contacts_collection: String,

    /// Leads collection name (default: "leads")
    pub leads_collection: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CUREM_DATA_DIR`: directory for collection files (default: in memory)
    /// - `CUREM_CONTACTS_COLLECTION`: contacts collection name (default: "contacts")
    /// - `CUREM_LEADS_COLLECTION`: leads collection name (default: "leads")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let config = Config {
            data_dir: env::var("CUREM_DATA_DIR").ok().map(PathBuf::from),
            contacts_collection: env::var("CUREM_CONTACTS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_CONTACTS_COLLECTION.to_string()),
            leads_collection: env::var("CUREM_LEADS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_LEADS_COLLECTION.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration names two distinct, file-safe collections.
    ///
    /// Collection names double as file stems, so they must be non-empty and
    /// use only `[A-Za-z0-9_-]`. A configured `data_dir` must not be empty.
    /// Errors name the environment variable that feeds the bad field.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().to_string_lossy().trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: "CUREM_DATA_DIR".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
        }

        check_collection_name("CUREM_CONTACTS_COLLECTION", &self.contacts_collection)?;
        check_collection_name("CUREM_LEADS_COLLECTION", &self.leads_collection)?;

        if self.contacts_collection == self.leads_collection {
            return Err(ConfigError::InvalidValue {
                var: "CUREM_LEADS_COLLECTION".to_string(),
                reason: format!(
                    "Must differ from the contacts collection ('{}')",
                    self.contacts_collection
                ),
            });
        }

        Ok(())
    }
}

fn check_collection_name(var_name: &str, name: &str) -> ConfigResult<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Must be non-empty and use only [A-Za-z0-9_-], got: {}", name),
        });
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: None,
            contacts_collection: DEFAULT_CONTACTS_COLLECTION.to_string(),
            leads_collection: DEFAULT_LEADS_COLLECTION.to_string(),
            log_level: "error".to_string(),
        }
    }
}
