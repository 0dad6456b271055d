//! Contains the `Collection` struct, the query and storage engine for one logical collection:
//! an ordered, identifier-keyed set of documents backed by a single JSON file.

mod inspection;
mod ops;
mod save;

use crate::persistence::FilePersistence;
use crate::table::DocumentTable;
use crate::types::{FlushState, WriteOptions};
use crate::{RdocsError, Result};
use parking_lot::RwLock;
use std::path::PathBuf;

/// A collection handle for querying and mutating documents
#[derive(Debug)]
pub struct Collection {
    name: String,
    table: RwLock<DocumentTable>,
    persistence: FilePersistence,
    flush_state: FlushState,
}

// MARK: - Core & Construction
impl Collection {
    /// Opens a standalone collection over a JSON file, loading it if the file exists.
    ///
    /// The collection gets its own dirty flag; collections obtained through a
    /// [`Database`](crate::Database) share the database's flag instead.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                RdocsError::invalid_name(
                    &path.display().to_string(),
                    "collection path has no file name",
                )
            })?;
        Self::load(name, path, WriteOptions::default(), FlushState::new()).await
    }

    /// Creates the collection bound to `path` and loads the file if it exists.
    ///
    /// A file that fails to parse is an error; the collection is never reset to empty.
    pub(crate) async fn load(
        name: String,
        path: PathBuf,
        options: WriteOptions,
        flush_state: FlushState,
    ) -> Result<Self> {
        let persistence = FilePersistence::new(path, options);
        let table = match persistence.load().await? {
            Some(table) => {
                tracing::debug!(
                    collection = %name,
                    documents = table.len(),
                    "loaded collection file"
                );
                table
            }
            None => DocumentTable::new(),
        };

        Ok(Self {
            name,
            table: RwLock::new(table),
            persistence,
            flush_state,
        })
    }
}
