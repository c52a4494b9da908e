use async_trait::async_trait;
use curem::collection::{Collection, Document, Filter, MemoryCollection};
use curem::error::{StoreError, StoreResult};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock collection for testing.
///
/// Wraps a MemoryCollection, counts calls per method and can be told to fail
/// a given method with an I/O error.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockCollection {
    inner: MemoryCollection,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockCollection {
    /// Create a new empty MockCollection.
    pub fn new(name: &str) -> Self {
        Self {
            inner: MemoryCollection::new(name),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every later call to `method` fail.
    pub fn fail_on(&self, method: &str) {
        self.failing.lock().unwrap().push(method.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.lock().unwrap().iter().any(|m| m == method) {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::Other,
                format!("injected {} failure", method),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Collection for MockCollection {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn find(&self, filter: &Filter) -> StoreResult<Vec<Document>> {
        self.track_call("find")?;
        self.inner.find(filter).await
    }

    async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Document>> {
        self.track_call("find_one")?;
        self.inner.find_one(filter).await
    }

    async fn insert(&self, document: Document) -> StoreResult<()> {
        self.track_call("insert")?;
        self.inner.insert(document).await
    }

    async fn update(&self, selector: &Filter, document: Document) -> StoreResult<()> {
        self.track_call("update")?;
        self.inner.update(selector, document).await
    }

    async fn remove(&self, selector: &Filter) -> StoreResult<()> {
        self.track_call("remove")?;
        self.inner.remove(selector).await
    }

    async fn count(&self) -> StoreResult<usize> {
        self.track_call("count")?;
        self.inner.count().await
    }

    async fn clear(&self) -> StoreResult<()> {
        self.track_call("clear")?;
        self.inner.clear().await
    }
}
