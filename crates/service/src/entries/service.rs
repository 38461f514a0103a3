use std::sync::Arc;

use tracing::{error, info, warn};

use super::domain::{Entry, EntryInput, REQUIRED_FIELDS_MESSAGE};
use super::repository::EntryRepository;
use crate::errors::ServiceError;
use crate::metrics::record_operation;

/// Stateless CRUD operations over an [`EntryRepository`].
///
/// Each call performs exactly one repository operation. Storage failures are
/// logged here with their cause; the caller only sees the classification.
#[derive(Clone)]
pub struct EntryService {
    repo: Arc<dyn EntryRepository>,
}

impl EntryService {
    pub fn new(repo: Arc<dyn EntryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Entry>, ServiceError> {
        let res = self.repo.load_all().await;
        if let Ok(entries) = &res {
            info!(count = entries.len(), "list entries");
        }
        observe("list", None, res)
    }

    pub async fn get(&self, id: &str) -> Result<Entry, ServiceError> {
        let res = self
            .repo
            .find_by_id(id)
            .await
            .and_then(|found| found.ok_or_else(|| ServiceError::not_found("entry")));
        observe("get", Some(id), res)
    }

    pub async fn create(&self, input: EntryInput) -> Result<Entry, ServiceError> {
        let res = match input.validate() {
            Ok((title, content)) => self.repo.append(Entry::new(title, content)).await,
            Err(e) => Err(e),
        };
        if let Ok(entry) = &res {
            info!(entry_id = %entry.id, "entry created");
        }
        observe("create", None, res)
    }

    /// The id is resolved before the input is validated, so an unknown id
    /// reports `NotFound` even when the body is also invalid.
    pub async fn update(&self, id: &str, input: EntryInput) -> Result<Entry, ServiceError> {
        let res = self
            .repo
            .update(
                id,
                Box::new(move |entry: &mut Entry| -> Result<(), ServiceError> {
                    let (title, content) = input.validate()?;
                    entry.revise(title, content);
                    Ok(())
                }),
            )
            .await;
        if res.is_ok() {
            info!(entry_id = %id, "entry updated");
        }
        observe("update", Some(id), res)
    }

    /// Settle a create whose body could not be read; counted as a `create`.
    pub fn reject_create(&self) -> ServiceError {
        let res: Result<(), ServiceError> = Err(ServiceError::Validation(REQUIRED_FIELDS_MESSAGE.into()));
        match observe("create", None, res) {
            Err(e) => e,
            Ok(()) => ServiceError::Validation(REQUIRED_FIELDS_MESSAGE.into()),
        }
    }

    /// Settle an update whose body could not be read at all. The id is still
    /// resolved first; the outcome is counted as an `update`.
    pub async fn reject_update(&self, id: &str) -> ServiceError {
        let res: Result<(), ServiceError> = match self.repo.find_by_id(id).await {
            Ok(Some(_)) => Err(ServiceError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
            Ok(None) => Err(ServiceError::not_found("entry")),
            Err(e) => Err(e),
        };
        match observe("update", Some(id), res) {
            Err(e) => e,
            Ok(()) => ServiceError::Validation(REQUIRED_FIELDS_MESSAGE.into()),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let res = self.repo.remove(id).await.map(|_| ());
        if res.is_ok() {
            info!(entry_id = %id, "entry deleted");
        }
        observe("delete", Some(id), res)
    }
}

fn observe<T>(op: &'static str, id: Option<&str>, res: Result<T, ServiceError>) -> Result<T, ServiceError> {
    match &res {
        Ok(_) => record_operation(op, "ok"),
        Err(e) => {
            record_operation(op, e.kind());
            match e {
                ServiceError::Storage(cause) => error!(op, entry_id = ?id, error = %cause, "entry storage failure"),
                ServiceError::NotFound(_) => info!(op, entry_id = ?id, "entry not found"),
                ServiceError::Validation(msg) => warn!(op, entry_id = ?id, %msg, "entry rejected"),
            }
        }
    }
    res
}
