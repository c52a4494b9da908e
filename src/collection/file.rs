use crate::collection::memory::{insert_into, remove_from, replace_in};
use crate::collection::{Collection, Document, Filter};
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Collection persisted as a JSON array in a single file.
///
/// The file is read once on open. Every mutation rewrites it through a
/// temporary sibling file and a rename, and only then updates the in-memory
/// copy, so a failed write leaves both unchanged.
pub struct JsonFileCollection {
    name: String,
    path: PathBuf,
    documents: Mutex<Vec<Document>>,
}

impl JsonFileCollection {
    /// Open `<dir>/<name>.json`, starting empty if the file does not exist.
    pub async fn open(dir: impl AsRef<Path>, name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();
        let path = dir.as_ref().join(format!("{}.json", name));

        let documents = match tokio::fs::read(&path).await {
            Ok(bytes) => Self::decode(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            collection = %name,
            path = %path.display(),
            documents = documents.len(),
            "Opened file collection"
        );

        Ok(Self {
            name,
            path,
            documents: Mutex::new(documents),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(bytes: &[u8]) -> StoreResult<Vec<Document>> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let values: Vec<Value> = serde_json::from_slice(bytes)?;
        values
            .into_iter()
            .map(|value| match value {
                Value::Object(document) => Ok(document),
                other => Err(StoreError::InvalidDocument(format!(
                    "expected an object, found {}",
                    other
                ))),
            })
            .collect()
    }

    async fn persist(&self, documents: &[Document]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(documents)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Apply `change` to a copy of the documents, persist it, then commit.
    async fn mutate<F>(&self, change: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Vec<Document>) -> StoreResult<()> + Send,
    {
        let mut documents = self.documents.lock().await;
        let mut next = documents.clone();
        change(&mut next)?;
        self.persist(&next).await?;
        *documents = next;
        Ok(())
    }
}

#[async_trait]
impl Collection for JsonFileCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find(&self, filter: &Filter) -> StoreResult<Vec<Document>> {
        let documents = self.documents.lock().await;
        Ok(documents
            .iter()
            .filter(|document| filter.matches(document))
            .cloned()
            .collect())
    }

    async fn insert(&self, document: Document) -> StoreResult<()> {
        self.mutate(|documents| insert_into(documents, document))
            .await
    }

    async fn update(&self, selector: &Filter, document: Document) -> StoreResult<()> {
        self.mutate(|documents| replace_in(documents, selector, document))
            .await
    }

    async fn remove(&self, selector: &Filter) -> StoreResult<()> {
        self.mutate(|documents| remove_from(documents, selector))
            .await
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.documents.lock().await.len())
    }

    async fn clear(&self) -> StoreResult<()> {
        self.mutate(|documents| {
            documents.clear();
            Ok(())
        })
        .await
    }
}
