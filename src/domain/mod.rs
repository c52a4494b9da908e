//! Domain value objects and types.
//!
//! Type-safe wrappers for record ids, email addresses and slugs. These value
//! objects validate at construction time, so invalid data never reaches a
//! collection.

pub mod email;
pub mod errors;
pub mod record_id;
pub mod slug;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use record_id::RecordId;
pub use slug::{base_slug, slugify, with_random_suffix};
