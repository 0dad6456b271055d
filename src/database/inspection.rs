//! Contains inspection and statistics methods for the `Database`.
use super::Database;
use crate::types::{DatabaseStats, COLLECTION_EXTENSION};
use crate::{RdocsError, Result};
use std::collections::BTreeSet;
use std::path::Path;
use tokio::fs;

impl Database {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory holding the collection files.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if no collection was mutated since the last successful flush.
    pub fn is_flushed(&self) -> bool {
        self.flush_state.is_flushed()
    }

    /// Lists collection names found on disk together with those only held in memory, sorted.
    pub async fn collection_names(&self) -> Result<Vec<String>> {
        let mut names: BTreeSet<String> = self
            .materialized()
            .iter()
            .map(|collection| collection.name().to_string())
            .collect();

        let mut entries = fs::read_dir(&self.path)
            .await
            .map_err(|e| RdocsError::fs(&self.path, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RdocsError::fs(&self.path, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(COLLECTION_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.insert(stem.to_string());
            }
        }

        Ok(names.into_iter().collect())
    }

    /// Gets statistics over the materialized collections.
    pub fn stats(&self) -> DatabaseStats {
        let collections = self.materialized();
        DatabaseStats {
            name: self.name.clone(),
            collection_count: collections.len(),
            document_count: collections.iter().map(|c| c.len()).sum(),
            flushed: self.is_flushed(),
        }
    }
}
