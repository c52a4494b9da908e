use crate::domain::RecordId;
use serde_json::{Map, Value};

/// A stored record: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

/// Field holding a document's unique identifier.
pub const ID_FIELD: &str = "id";

/// Field-equality filter, e.g. `{slug: "sam-flynn"}`.
///
/// A document matches when every listed field is present with an equal
/// value. The empty filter matches every document.
///
/// # Example
///
/// ```
/// use curem::collection::Filter;
/// use serde_json::json;
///
/// let filter = Filter::new().where_eq("slug", "sam-flynn");
/// let doc = json!({"id": "1", "slug": "sam-flynn"});
/// assert!(filter.matches(doc.as_object().unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: Map<String, Value>,
}

impl Filter {
    /// Filter matching every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter selecting a document by its id.
    pub fn by_id(id: &RecordId) -> Self {
        Self::new().where_eq(ID_FIELD, id.to_string())
    }

    /// Require `field` to equal `value`.
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Whether the document satisfies every condition.
    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }

    /// Whether the filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
