//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use careerhub_core::config::{load_config_from, CareerhubConfig};
use careerhub_core::storage::FileStorage;
use careerhub_core::store::RecordStore;

pub mod admin;
pub mod assess;
pub mod init;
pub mod jobs;
pub mod mentors;
pub mod profile;
pub mod records;
pub mod session;

/// Global options shared by every command.
pub struct Context {
    store_override: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl Context {
    pub fn new(store_override: Option<PathBuf>, config_path: Option<PathBuf>) -> Self {
        Self {
            store_override,
            config_path,
        }
    }

    /// Load the config, applying `--store` on top of it.
    pub fn config(&self) -> Result<CareerhubConfig> {
        let mut config = load_config_from(self.config_path.as_deref())?;
        if let Some(dir) = &self.store_override {
            config.store_dir = dir.clone();
        }
        Ok(config)
    }

    /// Open the record store described by the config.
    pub fn open_store(&self) -> Result<RecordStore<FileStorage>> {
        let config = self.config()?;
        let backend = FileStorage::new(&config.store_dir);
        RecordStore::open_with_key(backend, &config.storage_key).with_context(|| {
            format!(
                "failed to open store in {}",
                config.store_dir.display()
            )
        })
    }
}
