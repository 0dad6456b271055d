use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A stored record: an ordered mapping from field name to JSON value.
///
/// Field order is insertion order and is preserved when the collection is saved and reloaded.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Name of the reserved identifier field embedded in every stored document.
pub const ID_FIELD: &str = "_id";

/// Extension of the file backing each collection.
pub const COLLECTION_EXTENSION: &str = "json";

/// Root directory used when none is configured.
pub const DEFAULT_ROOT_DIR: &str = "data";

/// How a flush writes collection files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushMode {
    /// Write with blocking file I/O on the calling thread. Used by the shutdown path.
    Blocking,
    /// Write with async file I/O and log each completed collection.
    Background,
}

impl From<bool> for FlushMode {
    fn from(sync: bool) -> Self {
        if sync {
            FlushMode::Blocking
        } else {
            FlushMode::Background
        }
    }
}

/// Dirty-tracking bit shared by a database and every collection it owns.
///
/// `true` means nothing was mutated since the last successful flush.
#[derive(Debug, Clone, Default)]
pub struct FlushState(Arc<AtomicBool>);

impl FlushState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when there are no unsaved mutations.
    pub fn is_flushed(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Records a mutation.
    pub fn mark_dirty(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Marks the state flushed and returns the previous value.
    pub(crate) fn begin_flush(&self) -> bool {
        self.0.swap(true, Ordering::SeqCst)
    }
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root directory holding one subdirectory per database. Relative paths are resolved
    /// against the process working directory.
    pub root_dir: PathBuf,
    /// When set, every database flushes itself in the background at this interval.
    pub autosave_interval: Option<Duration>,
    /// Write collection files to a temporary sibling and rename it over the target.
    pub atomic_writes: bool,
    /// Indent collection files with two spaces.
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            autosave_interval: None,
            atomic_writes: false,
            pretty: true,
        }
    }
}

/// Options that control how collection files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    pub atomic: bool,
    pub pretty: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: false,
            pretty: true,
        }
    }
}

impl From<&StoreConfig> for WriteOptions {
    fn from(config: &StoreConfig) -> Self {
        Self {
            atomic: config.atomic_writes,
            pretty: config.pretty,
        }
    }
}

/// Statistics for a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    pub name: String,
    pub path: PathBuf,
    pub document_count: usize,
}

/// Statistics for a database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseStats {
    pub name: String,
    /// Number of collections materialized in memory.
    pub collection_count: usize,
    /// Number of documents across materialized collections.
    pub document_count: usize,
    pub flushed: bool,
}
