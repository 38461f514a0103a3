use std::{path::{Path, PathBuf}, sync::Arc};

use super::domain::Entry;
use super::repository::{EntryMutation, EntryRepository};
use crate::errors::ServiceError;
use crate::storage::json_array_store::JsonArrayStore;

/// Entry collection kept in a single JSON file (`data/entries.json` by
/// default), pretty-printed as an array in insertion order.
#[derive(Clone)]
pub struct FileEntryRepository {
    store: Arc<JsonArrayStore<Entry>>,
}

impl FileEntryRepository {
    /// Open the document at `path`, creating an empty one if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonArrayStore::<Entry>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

#[async_trait::async_trait]
impl EntryRepository for FileEntryRepository {
    async fn load_all(&self) -> Result<Vec<Entry>, ServiceError> {
        self.store.load_all().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, ServiceError> {
        let entries = self.store.load_all().await?;
        Ok(entries.into_iter().find(|e| e.id == id))
    }

    async fn append(&self, entry: Entry) -> Result<Entry, ServiceError> {
        self.store
            .mutate(move |entries| {
                entries.push(entry.clone());
                Ok(entry)
            })
            .await
    }

    async fn update(&self, id: &str, mutate: EntryMutation) -> Result<Entry, ServiceError> {
        self.store
            .mutate(move |entries| {
                let existing = entries
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or_else(|| ServiceError::not_found("entry"))?;
                mutate(&mut *existing)?;
                Ok(existing.clone())
            })
            .await
    }

    async fn remove(&self, id: &str) -> Result<Entry, ServiceError> {
        self.store
            .mutate(|entries| {
                let idx = entries
                    .iter()
                    .position(|e| e.id == id)
                    .ok_or_else(|| ServiceError::not_found("entry"))?;
                Ok(entries.remove(idx))
            })
            .await
    }
}
