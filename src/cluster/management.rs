//! Contains database discovery, lookup and bulk flush for the `Cluster`.
use super::{Cluster, DatabaseSlot, Discovery};
use crate::database::Database;
use crate::names::validate_database_name;
use crate::types::FlushMode;
use crate::{RdocsError, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

impl Cluster {
    /// Gets a handle to a database, opening or creating it on first use.
    ///
    /// The first call scans the root directory once and registers every subdirectory as a
    /// known database without loading it. Repeated calls with the same name return the same
    /// `Arc<Database>`.
    pub async fn open(&self, name: &str) -> Result<Arc<Database>> {
        validate_database_name(name)?;
        let discovery = self.discovery.get_or_try_init(|| self.discover()).await?;

        let slot = {
            let mut databases = self.databases.lock();
            Arc::clone(databases.entry(name.to_string()).or_default())
        };

        let opened = slot
            .get_or_try_init(|| Database::open(discovery.root.join(name), &self.config))
            .await;

        match opened {
            Ok(database) => Ok(Arc::clone(database)),
            Err(e) => {
                if !discovery.databases.contains(name) {
                    self.release_slot(name, slot);
                }
                Err(e)
            }
        }
    }

    /// Drops the registry entry of a database that failed to open, unless another caller
    /// holds the same slot.
    fn release_slot(&self, name: &str, slot: DatabaseSlot) {
        let mut databases = self.databases.lock();
        let unused = databases.get(name).is_some_and(|current| {
            Arc::ptr_eq(current, &slot) && !slot.initialized() && Arc::strong_count(&slot) == 2
        });
        if unused {
            databases.remove(name);
        }
    }

    /// Lists known database names, discovering the root directory if needed.
    pub async fn databases(&self) -> Result<Vec<String>> {
        self.discovery.get_or_try_init(|| self.discover()).await?;

        let databases = self.databases.lock();
        let mut names: Vec<String> = databases.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Flushes every database opened so far.
    pub async fn flush_all(&self, mode: FlushMode) -> Result<()> {
        for database in self.opened() {
            database.flush(mode).await?;
        }
        Ok(())
    }

    /// Resolved root directory, available once discovery has run.
    pub fn root(&self) -> Option<&Path> {
        self.discovery.get().map(|discovery| discovery.root.as_path())
    }

    fn opened(&self) -> Vec<Arc<Database>> {
        let databases = self.databases.lock();
        let mut opened: Vec<Arc<Database>> = databases
            .values()
            .filter_map(|slot| slot.get().cloned())
            .collect();
        opened.sort_by(|a, b| a.name().cmp(b.name()));
        opened
    }

    /// Resolves the root directory, creates it if missing and registers its subdirectories.
    async fn discover(&self) -> Result<Discovery> {
        let configured = &self.config.root_dir;
        let root = if configured.is_absolute() {
            configured.clone()
        } else {
            std::env::current_dir()
                .map_err(|e| RdocsError::fs(configured, e))?
                .join(configured)
        };

        fs::create_dir_all(&root)
            .await
            .map_err(|e| RdocsError::fs(&root, e))?;

        let mut found = Vec::new();
        let mut entries = fs::read_dir(&root)
            .await
            .map_err(|e| RdocsError::fs(&root, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RdocsError::fs(&root, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| RdocsError::fs(entry.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => found.push(name),
                Err(name) => {
                    tracing::warn!(entry = ?name, "skipping database directory with non UTF-8 name")
                }
            }
        }

        tracing::debug!(
            root = %root.display(),
            databases = found.len(),
            "discovered databases"
        );

        let mut databases = self.databases.lock();
        for name in &found {
            databases.entry(name.clone()).or_default();
        }

        Ok(Discovery {
            root,
            databases: found.into_iter().collect(),
        })
    }
}
