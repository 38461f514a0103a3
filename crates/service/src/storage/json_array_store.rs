use std::{marker::PhantomData, path::{Path, PathBuf}, sync::Arc, time::Instant};
use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::debug;

use crate::errors::ServiceError;
use crate::metrics::STORE_IO_SECONDS;

/// Generic JSON file-backed array store.
///
/// The whole collection lives in one JSON array document. Nothing is cached:
/// every read parses the file and every write serializes the full collection
/// and overwrites it.
///
/// One `RwLock` guards the document. Readers share it; `mutate` holds it
/// exclusively across load, change and save so concurrent writers cannot
/// overwrite each other's changes.
pub struct JsonArrayStore<T> {
    file_path: PathBuf,
    lock: RwLock<()>,
    _item: PhantomData<fn() -> T>,
}

impl<T> JsonArrayStore<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    /// Open the store at `path`. Creates the file with an empty array if
    /// missing; an existing file is left untouched, even if malformed.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(ServiceError::storage)?;
            }
        }

        if fs::metadata(&file_path).await.is_err() {
            let empty: Vec<T> = Vec::new();
            let data = serde_json::to_vec_pretty(&empty).map_err(ServiceError::storage)?;
            fs::write(&file_path, data).await.map_err(ServiceError::storage)?;
            debug!(path = %file_path.display(), "created empty document");
        }

        Ok(Arc::new(Self { file_path, lock: RwLock::new(()), _item: PhantomData }))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    async fn read_document(&self) -> Result<Vec<T>, ServiceError> {
        let started = Instant::now();
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|e| ServiceError::Storage(format!("read {}: {e}", self.file_path.display())))?;
        let items: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Storage(format!("parse {}: {e}", self.file_path.display())))?;
        STORE_IO_SECONDS.with_label_values(&["load"]).observe(started.elapsed().as_secs_f64());
        Ok(items)
    }

    async fn write_document(&self, items: &[T]) -> Result<(), ServiceError> {
        let started = Instant::now();
        // serialize fully before touching the file
        let data = serde_json::to_vec_pretty(items).map_err(ServiceError::storage)?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(format!("write {}: {e}", self.file_path.display())))?;
        STORE_IO_SECONDS.with_label_values(&["save"]).observe(started.elapsed().as_secs_f64());
        Ok(())
    }

    /// Read and parse the whole document.
    pub async fn load_all(&self) -> Result<Vec<T>, ServiceError> {
        let _guard = self.lock.read().await;
        self.read_document().await
    }

    /// Overwrite the document with `items`.
    pub async fn save_all(&self, items: &[T]) -> Result<(), ServiceError> {
        let _guard = self.lock.write().await;
        self.write_document(items).await
    }

    /// Load, apply `f`, and save, holding the write lock throughout.
    ///
    /// If `f` fails nothing is written.
    pub async fn mutate<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, ServiceError>,
    {
        let _guard = self.lock.write().await;
        let mut items = self.read_document().await?;
        let out = f(&mut items)?;
        self.write_document(&items).await?;
        Ok(out)
    }
}
