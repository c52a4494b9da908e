use crate::collection::{Document, Filter};
use crate::error::StoreResult;
use async_trait::async_trait;

/// A named set of documents queryable by field equality.
///
/// Every document carries a string `id` field that is unique within the
/// collection. Single-document operations are atomic; nothing spans more
/// than one call.
#[async_trait]
pub trait Collection: Send + Sync {
    /// Name the collection was opened under.
    fn name(&self) -> &str;

    /// All documents matching the filter, in storage order.
    async fn find(&self, filter: &Filter) -> StoreResult<Vec<Document>>;

    /// The first document matching the filter, if any.
    async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Document>> {
        Ok(self.find(filter).await?.into_iter().next())
    }

    /// Store a new document.
    ///
    /// Fails with `StoreError::DuplicateId` if the id is already present.
    async fn insert(&self, document: Document) -> StoreResult<()>;

    /// Replace the first document matching the selector.
    ///
    /// Fails with `StoreError::NotFound` if nothing matches.
    async fn update(&self, selector: &Filter, document: Document) -> StoreResult<()>;

    /// Remove the first document matching the selector.
    ///
    /// Fails with `StoreError::NotFound` if nothing matches.
    async fn remove(&self, selector: &Filter) -> StoreResult<()>;

    /// Number of stored documents.
    async fn count(&self) -> StoreResult<usize>;

    /// Remove every document.
    async fn clear(&self) -> StoreResult<()>;
}
