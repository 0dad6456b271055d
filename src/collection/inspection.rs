//! Contains methods for inspecting the `Collection` state.
use super::Collection;
use crate::types::CollectionStats;
use std::path::Path;

impl Collection {
    /// Normalized collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        self.persistence.path()
    }

    /// Number of documents currently in memory.
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.table.read().ids()
    }

    /// Returns `true` if nothing was mutated since the owning database's last successful flush.
    ///
    /// A standalone handle from [`Collection::open`] has no owning database and always
    /// returns `false`; `save` and `save_sync` do not change it.
    pub fn is_flushed(&self) -> bool {
        self.flush_state.is_flushed()
    }

    pub fn stats(&self) -> CollectionStats {
        CollectionStats {
            name: self.name.clone(),
            path: self.path().to_path_buf(),
            document_count: self.len(),
        }
    }
}
