//! Contact and lead stores.
//!
//! Stores validate records and translate them to and from collection
//! documents. They receive their collections explicitly; there is no
//! process-wide handle.

mod contact_store;
mod lead_store;

pub use contact_store::ContactStore;
pub use lead_store::LeadStore;

use crate::collection::Document;
use crate::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Serialize a record into a collection document.
pub(crate) fn encode<T: Serialize>(record: &T) -> StoreResult<Document> {
    match serde_json::to_value(record)? {
        Value::Object(document) => Ok(document),
        other => Err(StoreError::InvalidDocument(format!(
            "record serialized to {} instead of an object",
            other
        ))),
    }
}

/// Deserialize a collection document into a record.
pub(crate) fn decode<T: DeserializeOwned>(document: Document) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
