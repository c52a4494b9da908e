use crate::collection::{Collection, Document, Filter, ID_FIELD};
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process collection.
///
/// Cloning is cheap and clones share the same documents.
#[derive(Clone)]
pub struct MemoryCollection {
    name: String,
    documents: Arc<RwLock<Vec<Document>>>,
}

impl MemoryCollection {
    /// Create an empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

/// Id of a document, required to be a string.
pub(super) fn document_id(document: &Document) -> StoreResult<&str> {
    document
        .get(ID_FIELD)
        .and_then(|id| id.as_str())
        .ok_or_else(|| StoreError::InvalidDocument(format!("missing string '{}' field", ID_FIELD)))
}

pub(super) fn insert_into(documents: &mut Vec<Document>, document: Document) -> StoreResult<()> {
    let id = document_id(&document)?;
    if documents
        .iter()
        .any(|existing| existing.get(ID_FIELD).and_then(|v| v.as_str()) == Some(id))
    {
        return Err(StoreError::DuplicateId(id.to_string()));
    }
    documents.push(document);
    Ok(())
}

pub(super) fn replace_in(
    documents: &mut [Document],
    selector: &Filter,
    document: Document,
) -> StoreResult<()> {
    document_id(&document)?;
    let slot = documents
        .iter_mut()
        .find(|existing| selector.matches(existing))
        .ok_or(StoreError::NotFound)?;
    *slot = document;
    Ok(())
}

pub(super) fn remove_from(documents: &mut Vec<Document>, selector: &Filter) -> StoreResult<()> {
    let index = documents
        .iter()
        .position(|existing| selector.matches(existing))
        .ok_or(StoreError::NotFound)?;
    documents.remove(index);
    Ok(())
}

#[async_trait]
impl Collection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find(&self, filter: &Filter) -> StoreResult<Vec<Document>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|document| filter.matches(document))
            .cloned()
            .collect())
    }

    async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .find(|document| filter.matches(document))
            .cloned())
    }

    async fn insert(&self, document: Document) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        insert_into(&mut documents, document)
    }

    async fn update(&self, selector: &Filter, document: Document) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        replace_in(&mut documents, selector, document)
    }

    async fn remove(&self, selector: &Filter) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        remove_from(&mut documents, selector)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.documents.read().await.len())
    }

    async fn clear(&self) -> StoreResult<()> {
        self.documents.write().await.clear();
        Ok(())
    }
}
