use async_trait::async_trait;

use super::domain::Entry;
use crate::errors::ServiceError;

/// In-place change applied to a located entry. Returning an error aborts the
/// update without saving.
pub type EntryMutation = Box<dyn FnOnce(&mut Entry) -> Result<(), ServiceError> + Send>;

/// Persistence seam for the entry collection.
/// Implementations own the whole collection; every call is a complete
/// load (and, for writes, save) of it.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Full collection in insertion order.
    async fn load_all(&self) -> Result<Vec<Entry>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, ServiceError>;
    /// Append at the end of the collection.
    async fn append(&self, entry: Entry) -> Result<Entry, ServiceError>;
    /// Apply `mutate` to the entry with `id`; `NotFound` if absent.
    async fn update(&self, id: &str, mutate: EntryMutation) -> Result<Entry, ServiceError>;
    /// Remove the entry with `id` and return it; `NotFound` if absent.
    async fn remove(&self, id: &str) -> Result<Entry, ServiceError>;
}
