//! Contains the `Database`, a directory of collections sharing one dirty flag, responsible for
//! lazily opening its collections and flushing them back to disk.

mod autosave;
mod collections;
mod flush;
mod inspection;

use crate::collection::Collection;
use crate::types::{FlushState, StoreConfig, WriteOptions};
use crate::{RdocsError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;

/// A lazily materialized collection slot. The cell is the once-only initialization guard.
type CollectionSlot = Arc<OnceCell<Arc<Collection>>>;

/// A database handle owning the collections under one directory.
///
/// Dropping the last handle performs a best-effort blocking flush of unsaved mutations.
#[derive(Debug)]
pub struct Database {
    name: String,
    path: PathBuf,
    collections: Mutex<HashMap<String, CollectionSlot>>,
    flush_state: FlushState,
    write_options: WriteOptions,
    autosave_task: Mutex<Option<JoinHandle<()>>>,
}

impl Database {
    /// Opens the database stored in `path`, creating the directory if it does not exist.
    ///
    /// Collections are not read until they are first requested. If the configuration sets an
    /// autosave interval, a background flush task is started.
    pub async fn open(path: impl Into<PathBuf>, config: &StoreConfig) -> Result<Arc<Self>> {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                RdocsError::invalid_name(
                    &path.display().to_string(),
                    "database path has no directory name",
                )
            })?;

        fs::create_dir_all(&path)
            .await
            .map_err(|e| RdocsError::fs(&path, e))?;
        tracing::debug!(database = %name, path = %path.display(), "opened database");

        let database = Arc::new(Self {
            name,
            path,
            collections: Mutex::new(HashMap::new()),
            flush_state: FlushState::new(),
            write_options: WriteOptions::from(config),
            autosave_task: Mutex::new(None),
        });

        if let Some(period) = config.autosave_interval.filter(|p| !p.is_zero()) {
            database.spawn_autosave(period);
        }

        Ok(database)
    }

    /// Returns every collection materialized so far, ordered by name.
    pub(crate) fn materialized(&self) -> Vec<Arc<Collection>> {
        let collections = self.collections.lock();
        let mut loaded: Vec<Arc<Collection>> = collections
            .values()
            .filter_map(|slot| slot.get().cloned())
            .collect();
        loaded.sort_by(|a, b| a.name().cmp(b.name()));
        loaded
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        if let Some(handle) = self.autosave_task.get_mut().take() {
            handle.abort();
        }
        if let Err(e) = self.flush_blocking() {
            tracing::error!(database = %self.name, error = %e, "shutdown flush failed");
        }
    }
}
