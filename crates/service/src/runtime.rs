//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

use std::path::Path;

/// Ensure the frontend dir is present (warn only) and the directory holding
/// the entry document exists.
pub async fn ensure_env(frontend_dir: &str, entries_path: &Path) -> anyhow::Result<()> {
    let data_dir = entries_path.parent().unwrap_or_else(|| Path::new(""));
    common::env::ensure_env(frontend_dir, data_dir).await
}
