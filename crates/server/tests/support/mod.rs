#![allow(dead_code)]
use std::path::PathBuf;

use axum::Router;
use configs::AppConfig;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub root: PathBuf,
    pub entries_path: PathBuf,
}

impl TestApp {
    pub async fn cleanup(self) {
        let _ = tokio::fs::remove_dir_all(&self.root).await;
    }
}

/// Config pointing at an isolated temp directory per test.
pub fn test_config(root: &std::path::Path) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.storage.entries_path = root.join("data").join("entries.json").display().to_string();
    cfg.frontend.dir = root.join("frontend").display().to_string();
    cfg
}

pub fn temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("journal_server_{}", Uuid::new_v4()))
}

pub async fn build_app() -> anyhow::Result<TestApp> {
    build_app_in(temp_root()).await
}

/// Build the router over `root`, keeping any files already placed there.
pub async fn build_app_in(root: PathBuf) -> anyhow::Result<TestApp> {
    let cfg = test_config(&root);
    let router = server::startup::build_app(&cfg).await?;
    Ok(TestApp { router, entries_path: PathBuf::from(&cfg.storage.entries_path), root })
}
