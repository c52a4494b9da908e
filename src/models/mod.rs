//! Data models for CRM entities.
//!
//! Contacts and the leads that reference them by slug.

pub mod contact;
pub mod lead;

pub use contact::{Contact, NewContact};
pub use lead::{Lead, NewLead};
