#![cfg(test)]
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::entries::{repository::EntryMutation, Entry, EntryRepository};
use crate::errors::ServiceError;

/// Unique document path under the system temp dir, so tests never share state.
pub fn temp_document_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.json", Uuid::new_v4()))
}

/// Repository whose every call fails like an unreadable disk.
pub struct FailingRepository;

fn disk_gone() -> ServiceError {
    ServiceError::Storage("read data/entries.json: permission denied".into())
}

#[async_trait]
impl EntryRepository for FailingRepository {
    async fn load_all(&self) -> Result<Vec<Entry>, ServiceError> { Err(disk_gone()) }
    async fn find_by_id(&self, _id: &str) -> Result<Option<Entry>, ServiceError> { Err(disk_gone()) }
    async fn append(&self, _entry: Entry) -> Result<Entry, ServiceError> { Err(disk_gone()) }
    async fn update(&self, _id: &str, _mutate: EntryMutation) -> Result<Entry, ServiceError> { Err(disk_gone()) }
    async fn remove(&self, _id: &str) -> Result<Entry, ServiceError> { Err(disk_gone()) }
}
