//! Curem - contact and lead persistence for a minimal CRM backend.
//!
//! Validates, slugifies and stores contacts, and resolves the leads that
//! reference a contact by its slug.
//!
//! # Architecture
//!
//! - **domain**: Value objects (record ids, email addresses, slugs)
//! - **models**: Contact and lead records
//! - **collection**: Document collection abstraction with in-memory and JSON-file backends
//! - **repositories**: `ContactStore` and `LeadStore`
//! - **database**: Opens the collections described by a `Config`
//! - **config**: Configuration from environment variables
//! - **logging**: `tracing` subscriber setup
//! - **error**: Error types
//!
//! # Example
//!
//! ```
//! use curem::{Config, Database, NewContact};
//!
//! # tokio_test::block_on(async {
//! let db = Database::open(&Config::default()).await.unwrap();
//! let contacts = db.contact_store();
//!
//! let sam = contacts
//!     .create(NewContact::new("Sam Flynn", "samflynn@encom.com").country("USA"))
//!     .await
//!     .unwrap();
//! assert_eq!(sam.slug, "sam-flynn");
//! assert_eq!(contacts.get_by_slug("sam-flynn").await.unwrap(), sam);
//! # });
//! ```

pub mod collection;
pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod repositories;

pub use collection::{Collection, Document, Filter, JsonFileCollection, MemoryCollection};
pub use config::Config;
pub use database::Database;
pub use domain::{EmailAddress, RecordId, ValidationError};
pub use error::{ConfigError, ContactError, LeadError, StoreError};
pub use models::{Contact, Lead, NewContact, NewLead};
pub use repositories::{ContactStore, LeadStore};
